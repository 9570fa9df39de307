//! Preflight CLI - catalog export validation.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

/// Exit status for inputs that cannot be checked at all.
const EXIT_FATAL_INPUT: i32 = 2;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    let result = match cli.command {
        Commands::Check {
            file,
            output_dir,
            no_detail,
            delimiter,
        } => commands::check::run(file, output_dir, no_detail, delimiter),

        Commands::Headers { file, delimiter } => commands::headers::run(file, delimiter),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = if e.is_fatal_input() { EXIT_FATAL_INPUT } else { 1 };
        std::process::exit(code);
    }
}
