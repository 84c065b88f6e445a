//! Florida insurance TIV reports.
//!
//! Reads the policy CSV out of a ZIP archive and writes three reports: the
//! number of distinct counties, the 2012 total insured value, and the counties
//! whose insured value grew the most between 2011 and 2012.

pub mod aggregate;
pub mod config;
pub mod load;
pub mod pipeline;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use pipeline::{run, RunSummary};
