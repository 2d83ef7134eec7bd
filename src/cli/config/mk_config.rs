use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::ValidationError, log_utils::LogLevel};

use super::{
    Config, DEFAULT_LARGE_LOCAL, PEAK_SPLITTER, PEAK_SPLITTER_URL,
    super::{
        InputFormat, OutputPaths, QualScale, RawOptions, ToolProbe, WiggleDirs,
        genome_size::resolve_genome_size, summary::arg_summary,
    },
};

lazy_static! {
    static ref RE_MFOLD: Regex = Regex::new(r"^\s*([+-]?[0-9]+)\s*,\s*([+-]?[0-9]+)\s*$").unwrap();
}

impl Config {
    /// Check the raw options and derive the run configuration.
    ///
    /// Nothing is written to disk.  The only side effect is launching the sub-peak
    /// caller through `probe` when --call-subpeaks is set.
    pub fn validate(raw: &RawOptions, probe: &dyn ToolProbe) -> Result<Self, ValidationError> {
        let genome_size = resolve_genome_size(&raw.gsize)?;

        let treatment = raw
            .treatment
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingRequiredArgument("treatment"))?;

        let name = raw.name.as_str();
        if name.trim().is_empty() {
            return Err(ValidationError::invalid_parameter(
                "name",
                name,
                "experiment name must not be empty",
            ));
        }

        let format: InputFormat = raw.format.parse()?;
        debug!("Input format {} (parser {:?})", format, format.parser());

        let treatment_files = input_files(treatment, format.is_paired())?;
        let control_files = match raw.control.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => input_files(s, format.is_paired())?,
            None => Vec::new(),
        };
        let large_local = raw
            .large_local
            .filter(|x| *x > 0)
            .unwrap_or(DEFAULT_LARGE_LOCAL);

        let shift_size = shift_size(raw.shiftsize)?;

        let log_pvalue = log_pvalue(raw.pvalue)?;
        let mfold = parse_mfold(&raw.mfold)?;
        let qual_scale: QualScale = raw.qual_scale.parse()?;

        if raw.call_subpeaks {
            if !raw.store_wig {
                return Err(ValidationError::InvalidCombination {
                    option: "call-subpeaks",
                    requires: "wig",
                });
            }
            probe
                .probe(PEAK_SPLITTER)
                .map_err(|err| ValidationError::MissingDependency {
                    tool: PEAK_SPLITTER,
                    url: PEAK_SPLITTER_URL,
                    err,
                })?;
        }

        let output_paths = OutputPaths::new(name);
        let wiggle_dirs = if raw.store_wig {
            Some(WiggleDirs::check(name)?)
        } else {
            None
        };

        let mut cfg = Config {
            name: Box::from(name),
            genome_size,
            format,
            parser: format.parser(),
            gzip_input: format.gzip_input(),
            treatment_files,
            control_files,
            small_local: raw.small_local,
            large_local,
            shift_size,
            tag_size: raw.tsize,
            band_width: raw.bw,
            pvalue: raw.pvalue,
            log_pvalue,
            mfold,
            mfold_str: Box::from(raw.mfold.as_str()),
            qual_scale,
            call_subpeaks: raw.call_subpeaks,
            output_paths,
            wiggle_dirs,
            log_level: LogLevel::from_verbosity(raw.verbose),
            arg_summary: String::new(),
        };
        cfg.arg_summary = arg_summary(&cfg);
        Ok(cfg)
    }
}

fn check_file(p: PathBuf) -> Result<PathBuf, ValidationError> {
    if p.is_file() {
        Ok(p)
    } else {
        Err(ValidationError::FileNotFound(p))
    }
}

/// Paired formats take exactly two comma separated files, all others a single file
fn input_files(s: &str, paired: bool) -> Result<Vec<PathBuf>, ValidationError> {
    if paired {
        let fs: Vec<_> = s.split(',').collect();
        if fs.len() != 2 {
            return Err(ValidationError::InvalidFileCount {
                count: fs.len(),
                raw: s.to_owned(),
            });
        }
        fs.into_iter().map(|f| check_file(PathBuf::from(f))).collect()
    } else {
        check_file(PathBuf::from(s)).map(|p| vec![p])
    }
}

fn shift_size(x: i64) -> Result<u32, ValidationError> {
    if x <= 0 {
        return Err(ValidationError::invalid_parameter(
            "shiftsize",
            x,
            "--shiftsize must be > 0",
        ));
    }
    u32::try_from(x).map_err(|_| {
        ValidationError::invalid_parameter(
            "shiftsize",
            x,
            format!("--shiftsize must be at most {}", u32::MAX),
        )
    })
}

fn log_pvalue(pvalue: f64) -> Result<f64, ValidationError> {
    if pvalue > 0.0 && pvalue.is_finite() {
        Ok(-10.0 * pvalue.log10())
    } else {
        Err(ValidationError::invalid_parameter(
            "pvalue",
            pvalue,
            "p-value must be a number > 0",
        ))
    }
}

/// Bounds are returned as (low, high) whatever order they were given in
fn parse_mfold(s: &str) -> Result<(i64, i64), ValidationError> {
    let err = || {
        ValidationError::invalid_parameter(
            "mfold",
            s,
            "expected two integers separated by a comma, like '10,30'",
        )
    };
    let cap = RE_MFOLD.captures(s).ok_or_else(err)?;
    let a = cap[1].parse::<i64>().map_err(|_| err())?;
    let b = cap[2].parse::<i64>().map_err(|_| err())?;
    Ok((a.min(b), a.max(b)))
}
