use log;
use std::fs;
use std::path::{Path, PathBuf};

const SEPARATOR_WIDTH: usize = 80;

/// Renders the concatenated summary artifact for the selected files.
///
/// Sections appear in input order: a `File:` header with the relative path,
/// a dash separator, the file content (UTF-8, invalid sequences replaced),
/// then an equals separator and a blank line. A file that fails to read
/// after selection keeps its section, with the content replaced by an inline
/// error marker. An empty selection renders an empty string.
pub fn build_summary(root: &Path, relative_paths: &[PathBuf]) -> String {
    let dashes = "-".repeat(SEPARATOR_WIDTH);
    let equals = "=".repeat(SEPARATOR_WIDTH);
    let mut summary = String::new();

    for relative_path in relative_paths {
        let absolute_path = root.join(relative_path);
        summary.push_str(&format!("File: {}\n{}\n", relative_path.display(), dashes));
        match fs::read(&absolute_path) {
            Ok(bytes) => {
                summary.push_str(&String::from_utf8_lossy(&bytes));
            }
            Err(e) => {
                log::warn!("Error reading file {}: {}", absolute_path.display(), e);
                summary.push_str(&format!("Error reading file: {}\n", e));
            }
        }
        summary.push_str(&format!("\n{}\n\n", equals));
    }

    log::debug!(
        "Summary built: {} sections, {} bytes.",
        relative_paths.len(),
        summary.len()
    );
    summary
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
