use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// ValidationError
///
/// Reasons for rejecting a set of command line options.  All of these are fatal;
/// the binary reports the message and exits with a non-zero status.
///
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "Error when interpreting --gsize option: '{value}'. Available shortcuts of effective genome sizes are {shortcuts}"
    )]
    InvalidGenomeSize { value: String, shortcuts: String },

    #[error("Missing required argument --{0}")]
    MissingRequiredArgument(&'static str),

    #[error("Format \"{0}\" cannot be recognized")]
    UnsupportedFormat(String),

    #[error("Only two filenames are acceptable! But you provided {count}: '{raw}'")]
    InvalidFileCount { count: usize, raw: String },

    #[error("No such file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid --{option} '{value}': {expected}")]
    InvalidParameter {
        option: &'static str,
        value: String,
        expected: String,
    },

    #[error("In order to use --{option}, you need to set --{requires} as well")]
    InvalidCombination {
        option: &'static str,
        requires: &'static str,
    },

    #[error(
        "{tool} can not be accessed through the command line (OS error: {err}). \
        Please download {tool} from <{url}> and install it so that it can be run by typing '{tool}' at the command line"
    )]
    MissingDependency {
        tool: &'static str,
        url: &'static str,
        err: io::Error,
    },

    #[error("{} exists! Unable to create directory to store wiggle files", .0.display())]
    OutputConflict(PathBuf),
}

impl ValidationError {
    pub(crate) fn invalid_parameter<V: fmt::Display, S: Into<String>>(
        option: &'static str,
        value: V,
        expected: S,
    ) -> Self {
        Self::InvalidParameter {
            option,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}
