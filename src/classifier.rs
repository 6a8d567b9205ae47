use crate::report::{EntryKind, FileRecord};
use crate::walker::WalkedEntry;

/// Well-known config filenames and patterns. A relative path containing or
/// ending with any of these is classified as configuration.
pub const CONFIG_PATTERNS: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "webpack.config.js",
    "vite.config.ts",
    "next.config.js",
    "tailwind.config.js",
    ".env",
    ".env.local",
    "docker-compose.yml",
    "Dockerfile",
    ".gitignore",
    ".eslintrc",
];

/// Extensions of general-purpose programming languages.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "py", "java", "go", "rs", "php"];

const MARKDOWN_EXTENSION: &str = "md";

/// Output bucket a file lands in. Exactly one bucket per file, decided by
/// fixed precedence: config beats documentation beats source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Config,
    Documentation,
    Source,
}

pub fn is_config_file(relative_path: &str) -> bool {
    CONFIG_PATTERNS
        .iter()
        .any(|pattern| relative_path.contains(pattern) || relative_path.ends_with(pattern))
}

pub fn is_documentation_file(relative_path: &str, extension: Option<&str>) -> bool {
    extension == Some(MARKDOWN_EXTENSION)
        || relative_path.contains("README")
        || relative_path.contains("docs/")
        || relative_path.contains("CHANGELOG")
}

pub fn is_source_file(extension: Option<&str>) -> bool {
    extension.is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Evaluates all three predicates for a walked file. Every predicate result
/// is recorded on the record even though only one drives bucket placement.
pub fn classify(entry: &WalkedEntry) -> FileRecord {
    let extension = entry.extension.as_deref();

    FileRecord {
        path: entry.relative_path.clone(),
        kind: EntryKind::File,
        size_bytes: entry.size,
        extension: entry.extension.clone(),
        is_config: is_config_file(&entry.relative_path),
        is_source: is_source_file(extension),
        is_documentation: is_documentation_file(&entry.relative_path, extension),
    }
}

/// The first matching bucket in precedence order, or `None` for files that
/// satisfy no predicate (counted but never bucketed).
pub fn bucket_for(record: &FileRecord) -> Option<Bucket> {
    if record.is_config {
        Some(Bucket::Config)
    } else if record.is_documentation {
        Some(Bucket::Documentation)
    } else if record.is_source {
        Some(Bucket::Source)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(relative_path: &str, extension: &str) -> WalkedEntry {
        WalkedEntry {
            relative_path: relative_path.to_string(),
            is_dir: false,
            size: 64,
            extension: Some(extension.to_string()),
        }
    }

    #[test]
    fn manifest_is_config() {
        assert!(is_config_file("package.json"));
        assert!(is_config_file("backend/package.json"));
        assert!(!is_config_file("src/index.ts"));
    }

    #[test]
    fn markdown_readme_and_docs_are_documentation() {
        assert!(is_documentation_file("notes.md", Some("md")));
        assert!(is_documentation_file("README.md", Some("md")));
        assert!(is_documentation_file("docs/setup.ts", Some("ts")));
        assert!(is_documentation_file("CHANGELOG.md", Some("md")));
        assert!(!is_documentation_file("src/index.ts", Some("ts")));
    }

    #[test]
    fn source_goes_by_extension() {
        assert!(is_source_file(Some("ts")));
        assert!(is_source_file(Some("rs")));
        assert!(!is_source_file(Some("xml")));
        assert!(!is_source_file(None));
    }

    #[test]
    fn config_takes_precedence_over_documentation() {
        // Lives under docs/ but matches a config pattern.
        let record = classify(&file("docs/package.json", "json"));
        assert!(record.is_config);
        assert!(record.is_documentation);
        assert_eq!(bucket_for(&record), Some(Bucket::Config));
    }

    #[test]
    fn documentation_takes_precedence_over_source() {
        let record = classify(&file("docs/example.ts", "ts"));
        assert!(record.is_documentation);
        assert!(record.is_source);
        assert_eq!(bucket_for(&record), Some(Bucket::Documentation));
    }

    #[test]
    fn unmatched_files_get_no_bucket() {
        let record = classify(&file("data/feed.xml", "xml"));
        assert!(!record.is_config && !record.is_documentation && !record.is_source);
        assert_eq!(bucket_for(&record), None);
    }
}
