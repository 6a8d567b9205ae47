use crate::classifier::{self, Bucket};
use crate::config::Config;
use crate::manifest;
use crate::report::{self, ProjectReport};
use crate::walker::{resolve_project_path, TreeWalker};
use anyhow::Context;

/// Runs the whole analysis pipeline as one synchronous pass:
/// resolve → walk → classify → manifest → summary.
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn analyze(&self, project_path: &str) -> crate::Result<ProjectReport> {
        let root = resolve_project_path(project_path)
            .with_context(|| format!("codebase analysis failed for {}", project_path))?;

        let walker = TreeWalker::new(root.clone(), &self.config);
        let entries = walker
            .walk()
            .with_context(|| format!("codebase analysis failed for {}", project_path))?;

        let mut total_files = 0;
        let mut total_directories = 0;
        let mut source_files = Vec::new();
        let mut config_files = Vec::new();
        let mut document_files = Vec::new();

        for entry in &entries {
            if entry.is_dir {
                total_directories += 1;
                continue;
            }
            total_files += 1;

            let record = classifier::classify(entry);
            match classifier::bucket_for(&record) {
                Some(Bucket::Config) => config_files.push(record),
                Some(Bucket::Documentation) => document_files.push(record),
                Some(Bucket::Source) => source_files.push(record),
                // Counted in total_files but placed in no bucket.
                None => {}
            }
        }

        let tech_stack = manifest::analyze_tech_stack(&root, &config_files, &source_files);
        let summary = report::build_summary(&source_files, &config_files, &document_files, &tech_stack);

        Ok(ProjectReport {
            total_files,
            total_directories,
            source_files,
            config_files,
            document_files,
            tech_stack,
            summary,
        })
    }
}
