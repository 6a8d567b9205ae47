use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Result of a requirements-document read. Absence and read failures are
/// carried in the value; this function never raises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsFile {
    pub content: String,
    pub exists: bool,
    pub message: String,
}

/// Reads a requirements document at `file_path`, relative to `root`.
pub fn read_requirements(root: &Path, file_path: &str) -> RequirementsFile {
    let full_path = root.join(file_path);

    if !full_path.exists() {
        return RequirementsFile {
            content: String::new(),
            exists: false,
            message: format!("file not found: {}", file_path),
        };
    }

    match fs::read_to_string(&full_path) {
        Ok(content) => RequirementsFile {
            content,
            exists: true,
            message: format!("loaded requirements from {}", file_path),
        },
        Err(err) => RequirementsFile {
            content: String::new(),
            exists: false,
            message: format!("failed to read {}: {}", file_path, err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reports_absence_without_error() {
        let tmp = tempdir().unwrap();
        let result = read_requirements(tmp.path(), "requirements.md");
        assert!(!result.exists);
        assert!(result.content.is_empty());
        assert!(result.message.contains("not found"));
    }

    #[test]
    fn existing_file_returns_content() {
        let tmp = tempdir().unwrap();
        File::create(tmp.path().join("requirements.md"))
            .unwrap()
            .write_all(b"# Requirements\n- fast\n")
            .unwrap();

        let result = read_requirements(tmp.path(), "requirements.md");
        assert!(result.exists);
        assert!(result.content.contains("- fast"));
        assert!(result.message.contains("requirements.md"));
    }

    #[test]
    fn unreadable_directory_target_reports_failure_in_value() {
        let tmp = tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("docs")).unwrap();
        let result = read_requirements(tmp.path(), "docs");
        assert!(!result.exists);
        assert!(result.message.contains("failed to read"));
    }
}
