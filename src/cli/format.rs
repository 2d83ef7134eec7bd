use std::{fmt, str::FromStr};

use crate::error::ValidationError;

/// InputFormat
///
/// Alignment formats accepted for the treatment and control files.
/// ElandMultiPet is the only paired format: each sample is given as two files
/// (one per end) separated by a comma.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Eland,
    Bed,
    ElandMulti,
    ElandExport,
    ElandMultiPet,
    Sam,
    Bam,
    Bowtie,
    Auto,
}

/// Parser
///
/// The read parser that downstream stages must use for an input format.
/// Guess defers the choice until the first records of each file are read.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parser {
    ElandResult,
    Bed,
    ElandMulti,
    ElandExport,
    PairEndElandMulti,
    Sam,
    Bam,
    Bowtie,
    Guess,
}

impl InputFormat {
    pub const ALL: [Self; 9] = [
        Self::Eland,
        Self::Bed,
        Self::ElandMulti,
        Self::ElandExport,
        Self::ElandMultiPet,
        Self::Sam,
        Self::Bam,
        Self::Bowtie,
        Self::Auto,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Eland => "ELAND",
            Self::Bed => "BED",
            Self::ElandMulti => "ELANDMULTI",
            Self::ElandExport => "ELANDEXPORT",
            Self::ElandMultiPet => "ELANDMULTIPET",
            Self::Sam => "SAM",
            Self::Bam => "BAM",
            Self::Bowtie => "BOWTIE",
            Self::Auto => "AUTO",
        }
    }

    pub fn parser(&self) -> Parser {
        match self {
            Self::Eland => Parser::ElandResult,
            Self::Bed => Parser::Bed,
            Self::ElandMulti => Parser::ElandMulti,
            Self::ElandExport => Parser::ElandExport,
            Self::ElandMultiPet => Parser::PairEndElandMulti,
            Self::Sam => Parser::Sam,
            Self::Bam => Parser::Bam,
            Self::Bowtie => Parser::Bowtie,
            Self::Auto => Parser::Guess,
        }
    }

    /// BAM is BGZF compressed, so it is read through a gzip decoder
    pub fn gzip_input(&self) -> bool {
        matches!(self, Self::Bam)
    }

    pub fn is_paired(&self) -> bool {
        matches!(self, Self::ElandMultiPet)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for InputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|f| f.tag() == tag)
            .copied()
            .ok_or_else(|| ValidationError::UnsupportedFormat(s.to_owned()))
    }
}
