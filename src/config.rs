// src/config.rs

use clap::Parser;
use std::path::PathBuf;

/// Archive read when no `--input` is given.
pub const DEFAULT_ARCHIVE: &str = "FL_insurance.csv.zip";
/// CSV entry looked up inside the archive.
pub const DEFAULT_ENTRY: &str = "FL_insurance.csv";

pub const COUNT_FILE: &str = "count.txt";
pub const TIV_2012_FILE: &str = "tiv2012.txt";
pub const MOST_VALUABLE_FILE: &str = "most_valuable.txt";

/// Number of counties kept in `most_valuable.txt`.
pub const TOP_COUNTIES: usize = 10;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Florida insurance TIV reports: county count, 2012 total, top counties by growth"
)]
pub struct Args {
    /// Zip archive holding the policy CSV
    #[arg(long, default_value = DEFAULT_ARCHIVE)]
    pub input: PathBuf,
    /// Name of the CSV entry inside the archive
    #[arg(long, default_value = DEFAULT_ENTRY)]
    pub entry: String,
    /// Directory the three report files are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// How many counties to list in the most-valuable report
    #[arg(long, default_value_t = TOP_COUNTIES)]
    pub top: usize,
}

/// Resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub archive: PathBuf,
    pub entry: String,
    pub out_dir: PathBuf,
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive: PathBuf::from(DEFAULT_ARCHIVE),
            entry: DEFAULT_ENTRY.to_string(),
            out_dir: PathBuf::from("."),
            top_n: TOP_COUNTIES,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            archive: args.input,
            entry: args.entry,
            out_dir: args.out_dir,
            top_n: args.top,
        }
    }
}
