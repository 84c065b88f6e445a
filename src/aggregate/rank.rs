// src/aggregate/rank.rs
use std::collections::HashMap;

use crate::load::PolicyRecord;

/// A county and the summed change in insured value from 2011 to 2012.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyDelta {
    pub county: String,
    pub delta: f64,
}

/// Group by county, sum `tiv_2012 - tiv_2011` per group and keep the `n` largest.
///
/// Ordered by delta descending; equal deltas fall back to county name ascending
/// so the output is stable across runs.
pub fn top_counties(records: &[PolicyRecord], n: usize) -> Vec<CountyDelta> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for r in records {
        *sums.entry(r.county.as_str()).or_default() += r.tiv_2012 - r.tiv_2011;
    }

    let mut ranked: Vec<(&str, f64)> = sums.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(county, delta)| CountyDelta {
            county: county.to_string(),
            delta,
        })
        .collect()
}
