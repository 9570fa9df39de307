//! Check command - validate a catalog and report importability.

use std::io;
use std::path::PathBuf;

use colored::Colorize;
use preflight::report::default_preview_dir;
use preflight::{Preflight, PreflightConfig, ReportEmitter};
use tracing::warn;

pub fn run(
    file: PathBuf,
    output_dir: Option<PathBuf>,
    no_detail: bool,
    delimiter: u8,
) -> preflight::Result<()> {
    eprintln!(
        "{} {}",
        "Checking".cyan().bold(),
        file.display().to_string().white()
    );

    let config = PreflightConfig::default()
        .with_delimiter(delimiter)
        .with_detail(!no_detail);
    let report = Preflight::with_config(config).check(&file)?;

    ReportEmitter::emit_summary(io::stdout().lock(), &report.summary)?;

    if no_detail {
        return Ok(());
    }

    // A failed preview write is reported but does not fail the run.
    let dir = output_dir.unwrap_or_else(|| default_preview_dir(&file));
    match ReportEmitter::persist(&dir, &report.into_detail_report()) {
        Ok(path) => {
            eprintln!();
            eprintln!(
                "{} {}",
                "Preview written to".green().bold(),
                path.display().to_string().white()
            );
        }
        Err(e) => {
            warn!("{}", e);
            eprintln!("{} {}", "Could not write preview file:".yellow().bold(), e);
        }
    }

    Ok(())
}
