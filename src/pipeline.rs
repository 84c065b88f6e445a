// src/pipeline.rs
use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::aggregate::aggregate;
use crate::config::Config;
use crate::load::load_records;
use crate::report::render;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub counties: usize,
    pub tiv_2012: f64,
    pub ranked: usize,
}

/// Load, aggregate and write all three reports.
///
/// Every report is rendered before the first file is opened, so a bad input
/// leaves the output directory exactly as it was.
#[tracing::instrument(level = "info", skip(cfg), fields(archive = %cfg.archive.display(), entry = %cfg.entry))]
pub fn run(cfg: &Config) -> Result<RunSummary> {
    let start = Instant::now();

    // ─── 1) load & parse ─────────────────────────────────────────────
    let records = load_records(&cfg.archive, &cfg.entry)?;

    // ─── 2) aggregate & render ───────────────────────────────────────
    let agg = aggregate(&records, cfg.top_n);
    let reports = render(&agg);
    let summary = RunSummary {
        records: records.len(),
        counties: agg.counties,
        tiv_2012: agg.tiv_2012,
        ranked: agg.top.len(),
    };

    // ─── 3) write ────────────────────────────────────────────────────
    reports.write_all(&cfg.out_dir)?;

    info!(
        records = summary.records,
        counties = summary.counties,
        ranked = summary.ranked,
        out_dir = %cfg.out_dir.display(),
        elapsed = ?start.elapsed(),
        "reports written"
    );
    Ok(summary)
}
