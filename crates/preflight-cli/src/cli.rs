//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Preflight: validate a product catalog export before import
#[derive(Parser)]
#[command(name = "preflight")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Log level implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a catalog file and print the JSON summary
    Check {
        /// Path to the catalog export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory for the per-row preview file (default: <FILE dir>/tmp)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Skip writing the per-row preview file
        #[arg(long)]
        no_detail: bool,

        /// Field delimiter (single character, or "tab")
        #[arg(short, long, default_value = ";", value_parser = parse_delimiter)]
        delimiter: u8,
    },

    /// Show which header column each catalog field resolves to
    Headers {
        /// Path to the catalog export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (single character, or "tab")
        #[arg(short, long, default_value = ";", value_parser = parse_delimiter)]
        delimiter: u8,
    },
}

/// Parse a delimiter argument into a single byte.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" => Ok(b'\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!(
                    "Invalid delimiter: {:?}. Use a single ASCII character or \"tab\".",
                    s
                )),
            }
        }
    }
}
