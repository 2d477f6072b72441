use anyhow::{Context, Result};
use arboard::Clipboard;
use codedump_core::AppError;
use colored::*;
use log;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub fn deliver_to_file(summary: &str, path: &Path, quiet: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| AppError::DirCreation {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    let mut file = File::create(path).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(summary.as_bytes())
        .map_err(|e| AppError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    log::debug!("Summary written to {}", path.display());

    if !quiet {
        println!(
            "{} Summary written to: {}",
            "✅".green(),
            path.display().to_string().blue()
        );
    }
    Ok(())
}

pub fn deliver_to_clipboard(summary: &str, quiet: bool) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| AppError::Clipboard(e.to_string()))
        .context("Failed to access the system clipboard")?;
    clipboard
        .set_text(summary)
        .map_err(|e| AppError::Clipboard(e.to_string()))
        .context("Failed to copy the summary to the clipboard")?;
    log::debug!("Summary copied to clipboard ({} bytes).", summary.len());

    if !quiet {
        println!("{} Summary copied to the clipboard.", "✅".green());
    }
    Ok(())
}
