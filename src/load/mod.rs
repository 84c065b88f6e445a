// src/load/mod.rs
use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, info, warn};
use zip::ZipArchive;

pub mod parse;

/// Upper bound on the buffer reserved from the entry's declared size.
const MAX_PREALLOC: usize = 64 << 20;

pub use parse::{parse_record, parse_records, PolicyRecord, RecordError};

/// Open `zip_path`, look up `entry_name` by exact name and return its contents as text.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected. The archive and its
/// file handle are released before returning, on success and on error alike.
#[tracing::instrument(level = "info", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn read_entry<P: AsRef<Path>>(zip_path: P, entry_name: &str) -> Result<String> {
    let zip_path = zip_path.as_ref();
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {:?}", zip_path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP archive: {:?}", zip_path))?;

    let mut entry = archive
        .by_name(entry_name)
        .with_context(|| format!("Entry {} not found in {:?}", entry_name, zip_path))?;
    let mut buf = Vec::with_capacity(initial_capacity(entry.size()));
    entry
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {} into memory", entry_name))?;
    debug!(entry = entry_name, bytes = buf.len(), "entry buffered");

    match String::from_utf8(buf) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                entry = entry_name,
                valid_up_to = e.utf8_error().valid_up_to(),
                "entry is not valid UTF-8; replacing invalid sequences"
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Buffer size to reserve for an entry; the declared size comes from the archive and may be forged.
fn initial_capacity(declared: u64) -> usize {
    usize::try_from(declared)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOC)
}

/// Read the named CSV entry out of the archive and parse every data row.
pub fn load_records<P: AsRef<Path>>(zip_path: P, entry_name: &str) -> Result<Vec<PolicyRecord>> {
    let zip_path = zip_path.as_ref();
    let text = read_entry(zip_path, entry_name)?;
    let records = parse_records(&text)
        .with_context(|| format!("Malformed data in {} ({:?})", entry_name, zip_path))?;
    info!(records = records.len(), entry = entry_name, "loaded policy records");
    Ok(records)
}
