// src/test_support.rs
use anyhow::Result;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

use crate::load::PolicyRecord;

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fl_insurance=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Build a ZIP holding `entries` in order and persist it to a temp file.
pub fn zip_with_entries(entries: &[(&str, &[u8])]) -> Result<NamedTempFile> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, data) in entries {
            zip.start_file(*name, options)?;
            zip.write_all(data)?;
        }
        zip.finish()?;
    }

    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(&buf)?;
    tmp.flush()?;
    Ok(tmp)
}

pub fn record(county: &str, tiv_2011: f64, tiv_2012: f64) -> PolicyRecord {
    PolicyRecord {
        county: county.to_string(),
        tiv_2011,
        tiv_2012,
    }
}
