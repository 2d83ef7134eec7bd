use std::ffi::OsString;

use clap::ArgMatches;

use super::cli_model::cli_model;

/// RawOptions
///
/// Command line options as given by the user, before any checking.
/// Config::validate turns these into a Config.
///
#[derive(Debug, Clone)]
pub struct RawOptions {
    pub name: String,
    pub treatment: Option<String>,
    pub control: Option<String>,
    pub format: String,
    pub gsize: String,
    pub tsize: u32,
    pub bw: u32,
    pub pvalue: f64,
    pub mfold: String,
    pub shiftsize: i64,
    pub small_local: u32,
    pub large_local: Option<u32>,
    pub qual_scale: String,
    pub store_wig: bool,
    pub call_subpeaks: bool,
    pub verbose: u8,
}

/// Same values as the defaults in the command line model
impl Default for RawOptions {
    fn default() -> Self {
        Self {
            name: "NA".to_string(),
            treatment: None,
            control: None,
            format: "AUTO".to_string(),
            gsize: "hs".to_string(),
            tsize: 25,
            bw: 300,
            pvalue: 1e-5,
            mfold: "10,30".to_string(),
            shiftsize: 100,
            small_local: 1000,
            large_local: None,
            qual_scale: "auto".to_string(),
            store_wig: false,
            call_subpeaks: false,
            verbose: 2,
        }
    }
}

fn get<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> anyhow::Result<T> {
    m.try_get_one::<T>(id)?
        .cloned()
        .ok_or_else(|| anyhow!("Missing value for option {}", id))
}

impl RawOptions {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        Ok(Self {
            name: get(m, "name")?,
            treatment: m.try_get_one::<String>("treatment")?.cloned(),
            control: m.try_get_one::<String>("control")?.cloned(),
            format: get(m, "format")?,
            gsize: get(m, "gsize")?,
            tsize: get(m, "tsize")?,
            bw: get(m, "bw")?,
            pvalue: get(m, "pvalue")?,
            mfold: get(m, "mfold")?,
            shiftsize: get(m, "shiftsize")?,
            small_local: get(m, "small_local")?,
            large_local: m.try_get_one::<u32>("large_local")?.copied(),
            qual_scale: get(m, "qual_scale")?,
            store_wig: m.get_flag("store_wig"),
            call_subpeaks: m.get_flag("call_subpeaks"),
            verbose: get(m, "verbose")?,
        })
    }

    /// Parse an argument list (including the program name).  Help and version
    /// requests, and options clap itself rejects, come back as clap errors.
    pub fn try_from_args<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m = cli_model().try_get_matches_from(args)?;
        Self::from_matches(&m)
    }
}
