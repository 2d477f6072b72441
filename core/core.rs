pub mod classify;
pub mod error;
pub mod gather;
pub mod rules;
pub mod summary;

pub use classify::{TRUSTED_EXTENSIONS, is_text_file};
pub use error::{AppError, Result};
pub use gather::collect_text_files;
pub use rules::{IGNORE_FILE_NAME, IgnoreRule, IgnoreRuleSet};
pub use summary::build_summary;
