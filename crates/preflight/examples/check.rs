//! Example: Check a catalog export with Preflight.
//!
//! Usage:
//!   cargo run --example check -- <file_path>

use std::env;
use std::io;

use preflight::{Preflight, PreflightConfig, ReportEmitter};

fn main() -> preflight::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example check -- <file_path>");
        std::process::exit(1);
    }

    let preflight = Preflight::with_config(PreflightConfig::default().with_detail(false));
    let report = preflight.check(&args[1])?;

    println!("Resolved headers:");
    for (field, resolution) in report.mapping.iter() {
        println!("  {:12} {:?}", field.key(), resolution.label());
    }
    println!();

    ReportEmitter::emit_summary(io::stdout().lock(), &report.summary)
}
