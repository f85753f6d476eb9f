//! The Dang language CLI.
//!
//! This binary provides `dang run` and `dang check` commands and delegates
//! pipeline orchestration to the driver module.

use clap::{Parser, Subcommand};

mod diagnostics;
mod driver;

/// Command-line interface for the Dang interpreter.
#[derive(Parser)]
#[command(name = "dang")]
#[command(about = "The Dang programming language", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Evaluate a Dang program and print its final value.
    Run {
        /// The source file to evaluate (e.g., `hello.dang`).
        file: String,
    },
    /// Parse a Dang program and report diagnostics without evaluating.
    Check {
        /// The source file to check.
        file: String,
    },
}

/// Entry point for the Dang interpreter.
fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run { file } => driver::run(&file),
        Commands::Check { file } => driver::check(&file),
    };

    std::process::exit(exit_code);
}
