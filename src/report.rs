use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One classified file. All three predicate flags are carried even though
/// a file lands in at most one bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    pub kind: EntryKind,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub is_config: bool,
    pub is_source: bool,
    pub is_documentation: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechStack {
    /// Language names in first-seen order, no duplicates.
    pub languages: Vec<String>,
    /// Framework display names in first-seen order, no duplicates.
    pub frameworks: Vec<String>,
    /// Dependency names in manifest declaration order, capped at 20.
    pub dependencies: Vec<String>,
}

/// The complete analysis result. Built fresh per invocation, never cached.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub total_files: usize,
    pub total_directories: usize,
    pub source_files: Vec<FileRecord>,
    pub config_files: Vec<FileRecord>,
    pub document_files: Vec<FileRecord>,
    pub tech_stack: TechStack,
    pub summary: String,
}

impl ProjectReport {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn print_summary(&self) {
        println!("📊 Codebase Analysis Summary");
        println!("============================");
        println!("  Total files: {}", self.total_files);
        println!("  Total directories: {}", self.total_directories);
        println!();
        println!("{}", self.summary);
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

/// Renders the fixed-format summary block from the final aggregates.
pub fn build_summary(
    source_files: &[FileRecord],
    config_files: &[FileRecord],
    document_files: &[FileRecord],
    tech_stack: &TechStack,
) -> String {
    let top_dependencies = tech_stack
        .dependencies
        .iter()
        .take(5)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Project analysis results:\n\
         - Source files: {}\n\
         - Config files: {}\n\
         - Documentation files: {}\n\
         - Languages: {}\n\
         - Frameworks: {}\n\
         - Top dependencies: {}",
        source_files.len(),
        config_files.len(),
        document_files.len(),
        join_or_none(&tech_stack.languages),
        join_or_none(&tech_stack.frameworks),
        top_dependencies,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            kind: EntryKind::File,
            size_bytes: 10,
            extension: Some("ts".to_string()),
            is_config: false,
            is_source: true,
            is_documentation: false,
        }
    }

    #[test]
    fn summary_lists_counts_and_stack() {
        let stack = TechStack {
            languages: vec!["TypeScript".to_string()],
            frameworks: vec!["React".to_string(), "Express.js".to_string()],
            dependencies: vec![
                "react".to_string(),
                "express".to_string(),
                "lodash".to_string(),
                "axios".to_string(),
                "zod".to_string(),
                "left-pad".to_string(),
            ],
        };
        let source = vec![record("a.ts"), record("b.ts")];

        let summary = build_summary(&source, &[], &[], &stack);
        assert!(summary.contains("- Source files: 2"));
        assert!(summary.contains("- Languages: TypeScript"));
        assert!(summary.contains("- Frameworks: React, Express.js"));
        // Only the first five dependencies are listed.
        assert!(summary.contains("react, express, lodash, axios, zod"));
        assert!(!summary.contains("left-pad"));
    }

    #[test]
    fn empty_stack_uses_none_placeholder() {
        let summary = build_summary(&[], &[], &[], &TechStack::default());
        assert!(summary.contains("- Languages: none"));
        assert!(summary.contains("- Frameworks: none"));
        assert!(summary.contains("- Top dependencies: "));
    }

    #[test]
    fn report_serializes_with_contract_field_names() {
        let report = ProjectReport {
            total_files: 1,
            total_directories: 0,
            source_files: vec![record("a.ts")],
            config_files: vec![],
            document_files: vec![],
            tech_stack: TechStack::default(),
            summary: String::new(),
        };

        let json = report.to_json().unwrap();
        assert!(json.contains("\"totalFiles\""));
        assert!(json.contains("\"totalDirectories\""));
        assert!(json.contains("\"sourceFiles\""));
        assert!(json.contains("\"techStack\""));
        assert!(json.contains("\"sizeBytes\""));
        assert!(json.contains("\"isConfig\""));
        assert!(json.contains("\"kind\": \"file\""));
    }
}
