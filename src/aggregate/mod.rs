// src/aggregate/mod.rs
use std::collections::HashSet;

use crate::load::PolicyRecord;

pub mod rank;

pub use rank::{top_counties, CountyDelta};

/// Every figure the reports are rendered from, computed in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub counties: usize,
    pub tiv_2012: f64,
    pub top: Vec<CountyDelta>,
}

/// Run the three aggregations over `records`, keeping the `top_n` largest county deltas.
pub fn aggregate(records: &[PolicyRecord], top_n: usize) -> Aggregates {
    Aggregates {
        counties: count_counties(records),
        tiv_2012: total_tiv_2012(records),
        top: top_counties(records, top_n),
    }
}

/// Number of distinct county strings. Comparison is exact and case-sensitive.
pub fn count_counties(records: &[PolicyRecord]) -> usize {
    records
        .iter()
        .map(|r| r.county.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Sum of `tiv_2012` over all records, accumulated in input order.
pub fn total_tiv_2012(records: &[PolicyRecord]) -> f64 {
    // Fold from +0.0: an empty sum must render as "0.00", not "-0.00".
    records.iter().fold(0.0, |acc, r| acc + r.tiv_2012)
}
