use std::path::PathBuf;

use crate::log_utils::LogLevel;

use super::{InputFormat, OutputPaths, Parser, QualScale, WiggleDirs};

mod getters;
mod mk_config;

/// Large window used for the local lambda when --llocal is not given
pub const DEFAULT_LARGE_LOCAL: u32 = 10000;

/// Name of the external program used to split peaks into sub-peaks
pub const PEAK_SPLITTER: &str = "PeakSplitter";
pub const PEAK_SPLITTER_URL: &str = "http://www.ebi.ac.uk/bertone/software/PeakSplitter_Cpp.tar.gz";

/// Config
///
/// Validated run configuration.
/// This is generated from the command line arguments by Config::validate.
/// Once set it is read only
///
pub struct Config {
    name: Box<str>,
    genome_size: f64,
    format: InputFormat,
    parser: Parser,
    gzip_input: bool,
    treatment_files: Vec<PathBuf>,
    control_files: Vec<PathBuf>,
    small_local: u32,
    large_local: u32,
    shift_size: u32,
    tag_size: u32,
    band_width: u32,
    pvalue: f64,
    log_pvalue: f64,
    mfold: (i64, i64),
    mfold_str: Box<str>,
    qual_scale: QualScale,
    call_subpeaks: bool,
    output_paths: OutputPaths,
    wiggle_dirs: Option<WiggleDirs>,
    log_level: LogLevel,
    arg_summary: String,
}
