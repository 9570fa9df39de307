//! Headers command - show how catalog fields map onto the header row.

use std::path::PathBuf;

use colored::Colorize;
use preflight::schema::{resolve, MatchKind};
use preflight::{CatalogReader, FieldSpec, PreflightError, ReaderConfig, Resolution};

pub fn run(file: PathBuf, delimiter: u8) -> preflight::Result<()> {
    let config = ReaderConfig {
        delimiter,
        ..ReaderConfig::default()
    };
    let (reader, source) = CatalogReader::open(&file, &config)?;
    let specs = FieldSpec::catalog_defaults();
    let mapping = resolve(reader.headers(), &specs);

    println!(
        "{} {} ({} columns)",
        "Headers in".cyan().bold(),
        source.file.white(),
        source.column_count
    );
    println!();

    for spec in &specs {
        let marker = if spec.required { "*" } else { " " };
        let field = format!("{}{:12}", marker, spec.field.key());
        match mapping.resolution(spec.field) {
            Resolution::Found {
                label,
                index,
                matched_by,
            } => {
                let how = match matched_by {
                    MatchKind::Exact => "exact".green(),
                    MatchKind::Substring => "substring".yellow(),
                };
                println!("  {} -> {:30} column {:3}  {}", field, label, index, how);
            }
            Resolution::NotFound if spec.required => {
                println!("  {} -> {}", field, "not found".red().bold());
            }
            Resolution::NotFound => {
                println!("  {} -> {}", field, "not found".dimmed());
            }
        }
    }

    let missing = mapping.missing_required(&specs);
    if !missing.is_empty() {
        return Err(PreflightError::MissingHeader {
            fields: missing.iter().map(|f| f.to_string()).collect(),
            headers: mapping.headers().to_vec(),
        });
    }

    Ok(())
}
