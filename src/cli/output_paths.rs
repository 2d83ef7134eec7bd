use std::path::{Path, PathBuf};

use crate::error::ValidationError;

/// OutputPaths
///
/// Names of the result files for a run.  All are the run name with a fixed suffix.
///
#[derive(Debug, Clone)]
pub struct OutputPaths {
    peaks_xls: PathBuf,
    peaks_bed: PathBuf,
    summits_bed: PathBuf,
    treat_signal: PathBuf,
    control_signal: PathBuf,
    negative_peaks_xls: PathBuf,
    diag_xls: PathBuf,
    model_r: PathBuf,
    treat_read_probs: PathBuf,
    control_read_probs: PathBuf,
}

fn with_suffix(name: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", name, suffix))
}

impl OutputPaths {
    pub fn new(name: &str) -> Self {
        Self {
            peaks_xls: with_suffix(name, "_peaks.xls"),
            peaks_bed: with_suffix(name, "_peaks.bed"),
            summits_bed: with_suffix(name, "_summits.bed"),
            treat_signal: with_suffix(name, "_treat_afterfiting"),
            control_signal: with_suffix(name, "_control_afterfiting"),
            negative_peaks_xls: with_suffix(name, "_negative_peaks.xls"),
            diag_xls: with_suffix(name, "_diag.xls"),
            model_r: with_suffix(name, "_model.r"),
            treat_read_probs: with_suffix(name, "_treat_read_probs.bed"),
            control_read_probs: with_suffix(name, "_control_read_probs.bed"),
        }
    }

    pub fn peaks_xls(&self) -> &Path {
        &self.peaks_xls
    }

    pub fn peaks_bed(&self) -> &Path {
        &self.peaks_bed
    }

    pub fn summits_bed(&self) -> &Path {
        &self.summits_bed
    }

    /// Fitted treatment signal (prefix for wiggle/bedGraph tracks)
    pub fn treat_signal(&self) -> &Path {
        &self.treat_signal
    }

    pub fn control_signal(&self) -> &Path {
        &self.control_signal
    }

    pub fn negative_peaks_xls(&self) -> &Path {
        &self.negative_peaks_xls
    }

    pub fn diag_xls(&self) -> &Path {
        &self.diag_xls
    }

    /// R script that plots the fitted peak model
    pub fn model_r(&self) -> &Path {
        &self.model_r
    }

    pub fn treat_read_probs(&self) -> &Path {
        &self.treat_read_probs
    }

    pub fn control_read_probs(&self) -> &Path {
        &self.control_read_probs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [
            &self.peaks_xls,
            &self.peaks_bed,
            &self.summits_bed,
            &self.treat_signal,
            &self.control_signal,
            &self.negative_peaks_xls,
            &self.diag_xls,
            &self.model_r,
            &self.treat_read_probs,
            &self.control_read_probs,
        ]
        .into_iter()
        .map(|p| p.as_path())
    }
}

/// Directories that will receive the wiggle tracks.  Not created here.
#[derive(Debug, Clone)]
pub struct WiggleDirs {
    treat: PathBuf,
    control: PathBuf,
}

pub fn wiggle_subdir(name: &str) -> PathBuf {
    with_suffix(name, "_AREM_wiggle")
}

impl WiggleDirs {
    /// Refuses to reuse a wiggle directory left over from an earlier run
    pub fn check(name: &str) -> Result<Self, ValidationError> {
        let subdir = wiggle_subdir(name);
        if subdir.exists() {
            Err(ValidationError::OutputConflict(subdir))
        } else {
            Ok(Self {
                treat: subdir.join("treat"),
                control: subdir.join("control"),
            })
        }
    }

    pub fn treat(&self) -> &Path {
        &self.treat
    }

    pub fn control(&self) -> &Path {
        &self.control
    }
}
