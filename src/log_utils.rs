use std::fmt;

use anyhow::Context;

/// LogLevel
///
/// Represents minimum level of messages that will be logged
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert the --verbose count (0 = errors only, 3 = debug) to a minimum level.
    /// Counts above 3 give trace.
    pub fn from_verbosity(v: u8) -> Self {
        match v {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn level(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level_str = ["error", "warn", "info", "debug", "trace"];
        write!(f, "{}", level_str[self.level()])
    }
}

/// Initialize logging to stderr with timestamps
pub fn init_log(level: LogLevel) -> anyhow::Result<()> {
    stderrlog::new()
        .verbosity(level.level())
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .with_context(|| format!("Could not initialize logging at level {}", level))
}
