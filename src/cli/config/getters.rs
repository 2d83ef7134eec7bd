use std::path::PathBuf;

use crate::log_utils::LogLevel;

use super::{
    Config,
    super::{InputFormat, OutputPaths, Parser, QualScale, WiggleDirs},
};

impl Config {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective genome size (bp)
    pub fn genome_size(&self) -> f64 {
        self.genome_size
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn parser(&self) -> Parser {
        self.parser
    }

    pub fn gzip_input(&self) -> bool {
        self.gzip_input
    }

    pub fn treatment_files(&self) -> &[PathBuf] {
        &self.treatment_files
    }

    pub fn control_files(&self) -> &[PathBuf] {
        &self.control_files
    }

    pub fn has_control(&self) -> bool {
        !self.control_files.is_empty()
    }

    pub fn small_local(&self) -> u32 {
        self.small_local
    }

    pub fn large_local(&self) -> u32 {
        self.large_local
    }

    pub fn shift_size(&self) -> u32 {
        self.shift_size
    }

    pub fn tag_size(&self) -> u32 {
        self.tag_size
    }

    pub fn band_width(&self) -> u32 {
        self.band_width
    }

    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// -10 * log10(pvalue)
    pub fn log_pvalue(&self) -> f64 {
        self.log_pvalue
    }

    /// Lower and upper enrichment bounds for model building, in the order given
    pub fn mfold(&self) -> (i64, i64) {
        self.mfold
    }

    pub fn mfold_str(&self) -> &str {
        &self.mfold_str
    }

    pub fn qual_scale(&self) -> QualScale {
        self.qual_scale
    }

    pub fn call_subpeaks(&self) -> bool {
        self.call_subpeaks
    }

    pub fn output_paths(&self) -> &OutputPaths {
        &self.output_paths
    }

    pub fn store_wig(&self) -> bool {
        self.wiggle_dirs.is_some()
    }

    pub fn wiggle_dirs(&self) -> Option<&WiggleDirs> {
        self.wiggle_dirs.as_ref()
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn arg_summary(&self) -> &str {
        &self.arg_summary
    }
}
