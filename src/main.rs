//! Scout - Main Entry Point
//!
//! A standalone source outliner for MEL and Python script buffers: scans
//! script files and prints the declarations (procedures, functions, classes,
//! methods) a code editor would show in its navigation sidebar.

mod cli;
mod error;
mod language;
mod outline;
mod workspace;

use clap::Parser;

/// Application name constant.
const APP_NAME: &str = "scout";

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    if let Err(err) = cli::run(&args) {
        eprintln!("{}: {}", APP_NAME, err);
        std::process::exit(1);
    }
}
