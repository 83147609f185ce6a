//! textdiff CLI
//!
//! Shows the difference between two files using the host diff tool.
//! Exit status follows `diff`: 0 identical, 1 different, 2 trouble.

use clap::Parser;
use std::process::ExitCode;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "textdiff")]
#[command(about = "Show the difference between two files using the host diff tool", long_about = None)]
struct Cli {
    #[command(flatten)]
    diff: commands::diff::DiffArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::diff::execute(cli.diff) {
        Ok(commands::diff::Outcome::Identical) => ExitCode::SUCCESS,
        Ok(commands::diff::Outcome::Different) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
