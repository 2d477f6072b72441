mod cli_args;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log;
use std::process;

use cli_args::Cli;
use codedump_core::AppError;

fn main() {
    let cli_args = Cli::parse();

    setup_logging(cli_args.quiet, cli_args.verbose);

    let quiet = cli_args.quiet;
    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match run_app(cli_args, quiet) {
        Ok(_) => {
            log::info!("Application finished successfully.");
            0
        }
        Err(e) => {
            let exit_code = match e.downcast_ref::<AppError>() {
                Some(AppError::InvalidRoot { .. }) => 1,
                Some(AppError::Io(_)) => 2,
                Some(AppError::FileRead { .. }) => 2,
                Some(AppError::FileWrite { .. }) => 2,
                Some(AppError::DirCreation { .. }) => 2,
                Some(AppError::Clipboard(_)) => 3,
                Some(_) => 1, // Default for other core AppErrors
                None => 1,    // Default for other anyhow errors
            };
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_code
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off // Turn off logging completely if quiet
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,  // Default: Show warnings and errors
            1 => log::LevelFilter::Info,  // -v: Show info, warnings, errors
            2 => log::LevelFilter::Debug, // -vv: Show debug, info, warnings, errors
            _ => log::LevelFilter::Trace, // -vvv+: Show all levels
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None) // Keep logs clean
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn run_app(cli: Cli, quiet: bool) -> Result<()> {
    log::info!("Scanning directory: {}", cli.root.display());

    let text_files = codedump_core::collect_text_files(&cli.root)
        .context("Failed to collect text files")?;
    log::debug!("Selected {} files for the summary.", text_files.len());

    let summary = codedump_core::build_summary(&cli.root, &text_files);

    match cli.output.as_deref() {
        Some(path) => output::deliver_to_file(&summary, path, quiet)?,
        None => output::deliver_to_clipboard(&summary, quiet)?,
    }
    Ok(())
}
