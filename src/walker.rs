use crate::config::{normalize_extension, Config};
use crate::error::AnalysisError;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One filesystem entry that survived traversal and extension filtering.
#[derive(Debug, Clone)]
pub struct WalkedEntry {
    /// Path relative to the project root.
    pub relative_path: String,
    pub is_dir: bool,
    pub size: u64,
    /// Lowercased extension without the leading dot; `None` for directories.
    pub extension: Option<String>,
}

/// Resolves a user-supplied project path into an absolute root.
///
/// Absolute paths pass through; relative paths are joined to the current
/// working directory. The resolved path must exist.
pub fn resolve_project_path(project_path: &str) -> crate::Result<PathBuf> {
    let candidate = Path::new(project_path);
    let full_path = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        env::current_dir()?.join(candidate)
    };

    if !full_path.exists() {
        return Err(AnalysisError::PathNotFound(full_path).into());
    }
    Ok(full_path)
}

/// Bounded-depth traversal honoring the configured exclude patterns.
pub struct TreeWalker {
    root: PathBuf,
    max_depth: usize,
    exclude_patterns: Vec<String>,
    allowed_extensions: HashSet<String>,
}

impl TreeWalker {
    pub fn new(root: PathBuf, config: &Config) -> Self {
        let allowed_extensions = config
            .include_extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .collect();

        Self {
            root,
            max_depth: config.max_depth,
            exclude_patterns: config.exclude_patterns.clone(),
            allowed_extensions,
        }
    }

    /// Materializes the full entry list: every directory at depth ≤ max_depth,
    /// plus every file whose extension is in the allow-list. Excluded
    /// subtrees are pruned and never descended into. Entries come back
    /// sorted lexicographically by path so output ordering is deterministic.
    pub fn walk(&self) -> crate::Result<Vec<WalkedEntry>> {
        // Surface root-level failures (missing permissions, root is a file)
        // as a fatal walk error before iterating.
        fs::read_dir(&self.root).map_err(|source| AnalysisError::Walk {
            path: self.root.clone(),
            source,
        })?;

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .hidden(false)
            .max_depth(Some(self.max_depth))
            .sort_by_file_path(|a, b| a.cmp(b));

        let root = self.root.clone();
        let patterns = self.exclude_patterns.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            !is_excluded(entry.path(), &root, &patterns)
        });

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("Warning: skipping unreadable entry: {}", err);
                    continue;
                }
            };
            // Depth 0 is the root itself, which is not part of the report.
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    eprintln!("Warning: could not stat {}: {}", path.display(), err);
                    continue;
                }
            };

            let relative_path = path
                .strip_prefix(&self.root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            if metadata.is_dir() {
                entries.push(WalkedEntry {
                    relative_path,
                    is_dir: true,
                    size: 0,
                    extension: None,
                });
                continue;
            }

            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_ascii_lowercase());

            // Files outside the allow-list are invisible to the report.
            let Some(extension) = extension else { continue };
            if !self.allowed_extensions.contains(&extension) {
                continue;
            }

            entries.push(WalkedEntry {
                relative_path,
                is_dir: false,
                size: metadata.len(),
                extension: Some(extension),
            });
        }

        Ok(entries)
    }
}

/// Tests a path against the exclude patterns. Plain patterns match whole
/// path components; "*.ext" patterns match filename suffixes; any other
/// wildcard pattern is matched as a regex against the relative path and
/// the filename.
fn is_excluded(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative_str = relative.to_string_lossy();

    for pattern in patterns {
        if let Some(suffix) = pattern.strip_prefix("*.") {
            if let Some(filename) = path.file_name() {
                if filename
                    .to_string_lossy()
                    .ends_with(&format!(".{}", suffix))
                {
                    return true;
                }
            }
        } else if pattern.contains('*') {
            let regex_pattern = regex::escape(pattern).replace(r"\*", ".*");
            if let Ok(re) = regex::Regex::new(&regex_pattern) {
                if re.is_match(&relative_str) {
                    return true;
                }
                if let Some(filename) = path.file_name() {
                    if re.is_match(&filename.to_string_lossy()) {
                        return true;
                    }
                }
            }
        } else {
            for component in relative.components() {
                if component.as_os_str().to_string_lossy() == *pattern {
                    return true;
                }
            }
        }
    }

    false
}
