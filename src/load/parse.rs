// src/load/parse.rs
use std::num::ParseFloatError;
use thiserror::Error;

/// Zero-based column positions in the policy CSV.
pub const COUNTY_COLUMN: usize = 2;
pub const TIV_2011_COLUMN: usize = 7;
pub const TIV_2012_COLUMN: usize = 8;

/// One data row: the county it belongs to and its total insured value for 2011 and 2012.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRecord {
    pub county: String,
    pub tiv_2011: f64,
    pub tiv_2012: f64,
}

/// A data line that could not be turned into a [`PolicyRecord`].
///
/// `line` is 1-based and counts the header, so it matches what an editor shows.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("line {line}: expected at least {expected} fields, found {found}", expected = .column + 1)]
    MissingField {
        line: usize,
        column: usize,
        found: usize,
    },
    #[error("line {line}: county field is empty")]
    EmptyCounty { line: usize },
    #[error("line {line}: column {column} is not a number: {value:?}")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: column {column} is not a finite number: {value:?}")]
    NonFinite {
        line: usize,
        column: usize,
        value: String,
    },
}

/// Parse every line after the header. Stops at the first bad line.
pub fn parse_records(text: &str) -> Result<Vec<PolicyRecord>, RecordError> {
    split_lines(text)
        .enumerate()
        .skip(1)
        .map(|(idx, line)| parse_record(idx + 1, line))
        .collect()
}

/// Iterate over lines ended by `\n`, `\r\n` or a bare `\r`.
///
/// A terminator at the very end does not produce a trailing empty line; blank
/// lines in the middle are kept.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Split one data line on commas (no quoting) and pull out columns 2, 7 and 8.
pub fn parse_record(line_no: usize, line: &str) -> Result<PolicyRecord, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() <= TIV_2012_COLUMN {
        return Err(RecordError::MissingField {
            line: line_no,
            column: TIV_2012_COLUMN,
            found: fields.len(),
        });
    }

    let county = fields[COUNTY_COLUMN];
    if county.is_empty() {
        return Err(RecordError::EmptyCounty { line: line_no });
    }

    Ok(PolicyRecord {
        county: county.to_string(),
        tiv_2011: parse_amount(line_no, TIV_2011_COLUMN, fields[TIV_2011_COLUMN])?,
        tiv_2012: parse_amount(line_no, TIV_2012_COLUMN, fields[TIV_2012_COLUMN])?,
    })
}

fn parse_amount(line: usize, column: usize, raw: &str) -> Result<f64, RecordError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|source| RecordError::InvalidNumber {
            line,
            column,
            value: raw.to_string(),
            source,
        })?;
    // `parse` takes "inf"/"nan" in any case and overflows to infinity.
    if !value.is_finite() {
        return Err(RecordError::NonFinite {
            line,
            column,
            value: raw.to_string(),
        });
    }
    Ok(value)
}
