use std::{
    ffi::OsString,
    io::{self, Write},
};

use anyhow::Context;

mod cli_model;
mod config;
mod format;
mod genome_size;
mod output_paths;
mod probe;
mod qual_scale;
mod raw_options;
mod summary;

pub use config::{Config, DEFAULT_LARGE_LOCAL, PEAK_SPLITTER};
pub use format::{InputFormat, Parser};
pub use genome_size::{GENOME_SIZE_SHORTCUTS, resolve_genome_size};
pub use output_paths::{OutputPaths, WiggleDirs, wiggle_subdir};
pub use probe::{SystemProbe, ToolProbe};
pub use qual_scale::QualScale;
pub use raw_options::RawOptions;
pub use summary::fmt_sci;

use crate::{error::ValidationError, log_utils::init_log};

/// Parse and check the command line, then set up logging.
///
/// On a missing treatment file the usage text is written to stderr before
/// the error is returned.
pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model::cli_model().get_matches();
    let raw = RawOptions::from_matches(&m)?;

    let cfg = check_options(&raw, &SystemProbe, &mut io::stderr())?;

    init_log(cfg.log_level())?;
    info!("\n{}", cfg.arg_summary());
    Ok(cfg)
}

/// Validate `raw`, writing the usage text to `usage` if the treatment file is missing
pub fn check_options<W: Write>(
    raw: &RawOptions,
    probe: &dyn ToolProbe,
    usage: &mut W,
) -> anyhow::Result<Config> {
    match Config::validate(raw, probe) {
        Ok(cfg) => Ok(cfg),
        Err(e @ ValidationError::MissingRequiredArgument(_)) => {
            writeln!(usage, "{}", cli_model::cli_model().render_help())
                .with_context(|| "Could not write usage message")?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse and check an argument list without touching the process logger
pub fn validate_args<I, T>(args: I, probe: &dyn ToolProbe) -> anyhow::Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw = RawOptions::try_from_args(args)?;
    Config::validate(&raw, probe).with_context(|| "Invalid command line options")
}
