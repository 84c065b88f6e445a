// src/report/mod.rs
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::debug;

use crate::aggregate::{Aggregates, CountyDelta};
use crate::config::{COUNT_FILE, MOST_VALUABLE_FILE, TIV_2012_FILE};

/// Header of `most_valuable.txt`. Consumers key on this exact text.
pub const MOST_VALUABLE_HEADER: &str = "country,value";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Fixed two-decimal rendering with `.` as separator, independent of host locale.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// The three report bodies, fully rendered and ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reports {
    pub count: String,
    pub tiv_2012: String,
    pub most_valuable: String,
}

/// Render every report body from the computed aggregates.
///
/// Nothing touches the filesystem here, so a failure upstream of writing
/// leaves previous outputs as they were.
pub fn render(agg: &Aggregates) -> Reports {
    Reports {
        count: agg.counties.to_string(),
        tiv_2012: format_amount(agg.tiv_2012),
        most_valuable: render_most_valuable(&agg.top),
    }
}

/// Header line followed by one `county,amount` line per entry, each line terminated.
pub fn render_most_valuable(ranked: &[CountyDelta]) -> String {
    let mut out = String::new();
    out.push_str(MOST_VALUABLE_HEADER);
    out.push_str(LINE_ENDING);
    for entry in ranked {
        out.push_str(&entry.county);
        out.push(',');
        out.push_str(&format_amount(entry.delta));
        out.push_str(LINE_ENDING);
    }
    out
}

impl Reports {
    /// Write all three files into `out_dir`, creating or truncating each one.
    pub fn write_all(&self, out_dir: &Path) -> Result<()> {
        write_report(out_dir.join(COUNT_FILE), &self.count)?;
        write_report(out_dir.join(TIV_2012_FILE), &self.tiv_2012)?;
        write_report(out_dir.join(MOST_VALUABLE_FILE), &self.most_valuable)?;
        Ok(())
    }
}

/// Create-or-truncate `path` and write `body` to it as UTF-8.
pub fn write_report<P: AsRef<Path>>(path: P, body: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating report {:?}", path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(body.as_bytes())
        .with_context(|| format!("writing report {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("flushing report {:?}", path))?;
    debug!(path = %path.display(), bytes = body.len(), "report written");
    Ok(())
}
