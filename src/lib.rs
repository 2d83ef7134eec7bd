//! Option handling for AREM (Aligning Reads by Expectation Maximization), a
//! ChIP-seq peak caller that assigns multi-mapping reads probabilistically.
//!
//! [`cli::Config::validate`] checks the raw command line options and derives
//! everything later stages need: the read parser for the input format, the
//! effective genome size, the -10*log10 p-value cutoff, the model fold bounds
//! and the names of all output files.

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod cli;
pub mod error;
pub mod log_utils;
