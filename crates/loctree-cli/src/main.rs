use clap::Parser;
use colored::Colorize;
use std::process;

mod cli;
mod commands;

fn main() {
    let cli = cli::Cli::parse();

    // Exit codes: 0 = success, 1 = pending changes under --check,
    // 2 = hard error (missing directory, unwritable file)
    match commands::run_command(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            process::exit(2);
        }
    }
}
