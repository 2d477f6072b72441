use glob::Pattern;
use log;
use std::fs;
use std::path::Path;

/// Name of the ignore-rules file looked up at the scan root.
pub const IGNORE_FILE_NAME: &str = ".dumpignore";

// Prepended to every loaded rule set, whether or not the rules file declares
// them. Version-control metadata is never part of a summary.
const IMPLICIT_RULES: &[&str] = &[".git/"];

/// A single exclusion pattern, resolved to its kind once at load time.
#[derive(Debug, Clone)]
pub enum IgnoreRule {
    /// Trailing-separator pattern. Matches when its directory name equals any
    /// path segment, so `build/` excludes `build/out.txt` and `a/build/b` but
    /// not `src/build_notes.txt`.
    Directory(String),
    /// Shell-style wildcard (`*`, `?`, `[...]`) matched against the full
    /// relative path or just its final segment.
    Glob(Pattern),
}

impl IgnoreRule {
    /// Parses one trimmed, non-empty, non-comment rules-file line. Returns
    /// `None` for lines that produce no usable rule (bare separators, glob
    /// patterns that fail to compile), which the caller skips.
    fn parse(line: &str) -> Option<Self> {
        if line.ends_with('/') || line.ends_with('\\') {
            let name = line
                .trim_end_matches(['/', '\\'])
                .rsplit(['/', '\\'])
                .next()
                .unwrap_or("")
                .to_string();
            if name.is_empty() {
                log::warn!("Ignoring rule with empty directory name: \"{}\"", line);
                return None;
            }
            return Some(IgnoreRule::Directory(name));
        }
        match Pattern::new(line) {
            Ok(pattern) => Some(IgnoreRule::Glob(pattern)),
            Err(e) => {
                log::warn!("Invalid ignore pattern \"{}\": {}", line, e);
                None
            }
        }
    }

    fn matches(&self, normalized_path: &str) -> bool {
        match self {
            IgnoreRule::Directory(name) => {
                normalized_path.split('/').any(|segment| segment == name)
            }
            IgnoreRule::Glob(pattern) => {
                let basename = normalized_path
                    .rsplit('/')
                    .next()
                    .unwrap_or(normalized_path);
                pattern.matches(normalized_path) || pattern.matches(basename)
            }
        }
    }
}

/// Ordered exclusion rules for one scan, loaded once and read-only after.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRuleSet {
    /// Loads the rule set for a scan root.
    ///
    /// Always starts from the implicit version-control rule. A missing rules
    /// file yields just that; a rules-file read error is logged and treated
    /// the same.
    pub fn load(root: &Path) -> Self {
        let mut rules: Vec<IgnoreRule> = IMPLICIT_RULES
            .iter()
            .filter_map(|line| IgnoreRule::parse(line))
            .collect();

        let rules_path = root.join(IGNORE_FILE_NAME);
        match fs::read_to_string(&rules_path) {
            Ok(content) => {
                for line in content.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some(rule) = IgnoreRule::parse(line) {
                        log::trace!("Loaded ignore rule: {:?}", rule);
                        rules.push(rule);
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} at {}", IGNORE_FILE_NAME, root.display());
            }
            Err(e) => {
                log::warn!("Error reading {}: {}", rules_path.display(), e);
            }
        }

        Self { rules }
    }

    /// True if any rule matches the path (relative to the scan root).
    /// Separators are normalized to `/` before matching.
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        let normalized = relative_path.to_string_lossy().replace('\\', "/");
        self.rules.iter().any(|rule| rule.matches(&normalized))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
