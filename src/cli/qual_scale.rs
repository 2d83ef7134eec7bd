use std::{fmt, str::FromStr};

use crate::error::ValidationError;

/// Encoding of base qualities (phred scores) in the input reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualScale {
    Auto,
    Sanger33,
    Illumina64,
}

impl QualScale {
    const NAMES: [(&'static str, Self); 3] = [
        ("auto", Self::Auto),
        ("sanger+33", Self::Sanger33),
        ("illumina+64", Self::Illumina64),
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Sanger33 => "sanger+33",
            Self::Illumina64 => "illumina+64",
        }
    }
}

impl fmt::Display for QualScale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QualScale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.to_ascii_lowercase();
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == t)
            .map(|(_, q)| *q)
            .ok_or_else(|| {
                let allowed: Vec<_> = Self::NAMES.iter().map(|(n, _)| *n).collect();
                ValidationError::invalid_parameter(
                    "qual-scale",
                    s,
                    format!("allowed values are {}", allowed.join(", ")),
                )
            })
    }
}
