use crate::classify::is_text_file;
use crate::error::{AppError, Result};
use crate::rules::IgnoreRuleSet;
use log;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` and returns the relative paths of every text file that
/// survives the ignore rules, in directory-listing order.
///
/// Ignored directories are pruned whole: their contents are never listed and
/// never reach the classifier. Listing errors below the root are logged and
/// the affected subtree yields nothing; only a missing or non-directory root
/// is fatal.
pub fn collect_text_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AppError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    let rules = IgnoreRuleSet::load(root);
    log::debug!(
        "Loaded {} ignore rules for {}",
        rules.len(),
        root.display()
    );

    let root_for_filter = root.to_path_buf();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            match pathdiff::diff_paths(entry.path(), &root_for_filter) {
                Some(relative) => {
                    let ignored = rules.is_ignored(&relative);
                    if ignored {
                        log::trace!("Ignoring path: {}", relative.display());
                    }
                    !ignored
                }
                None => true,
            }
        });

    let mut text_files = Vec::new();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                let Some(relative) = pathdiff::diff_paths(path, root) else {
                    log::warn!("Could not get relative path for: {}", path.display());
                    continue;
                };
                if is_text_file(path) {
                    log::trace!("Selected text file: {}", relative.display());
                    text_files.push(relative);
                } else {
                    log::trace!("Skipping non-text file: {}", relative.display());
                }
            }
            Err(e) => {
                log::warn!(
                    "Error walking directory: {} (at {})",
                    e,
                    e.path()
                        .map_or_else(|| "unknown path".into(), |p| p.display().to_string())
                );
            }
        }
    }

    log::info!(
        "Selected {} text files under {}",
        text_files.len(),
        root.display()
    );
    Ok(text_files)
}

#[cfg(test)]
#[path = "gather_tests.rs"]
mod tests;
