use crate::error::AnalysisError;
use crate::report::{FileRecord, TechStack};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const MANIFEST_FILENAME: &str = "package.json";
const MAX_DEPENDENCIES: usize = 20;

/// Extension → language display name.
const LANGUAGE_MAP: &[(&str, &str)] = &[
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("js", "JavaScript"),
    ("jsx", "JavaScript"),
    ("py", "Python"),
    ("java", "Java"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("php", "PHP"),
];

/// Dependency-name substring → framework display name. A single dependency
/// may match several patterns; matches append in table order.
const FRAMEWORK_PATTERNS: &[(&str, &str)] = &[
    ("react", "React"),
    ("next", "Next.js"),
    ("vue", "Vue.js"),
    ("nuxt", "Nuxt.js"),
    ("angular", "Angular"),
    ("express", "Express.js"),
    ("fastify", "Fastify"),
    ("nestjs", "NestJS"),
    ("@mastra/core", "Mastra"),
    ("zendframework", "Zend Framework"),
    ("laravel", "Laravel"),
    ("symfony", "Symfony"),
    ("cakephp", "CakePHP"),
    ("codeigniter", "CodeIgniter"),
    ("yii", "Yii"),
    ("phalcon", "Phalcon"),
];

/// The two dependency groups of a package manifest. Key order is preserved
/// by serde_json's preserve_order feature, so merged dependencies come out
/// in declaration order.
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: serde_json::Map<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: serde_json::Map<String, serde_json::Value>,
}

/// Derives the tech stack from classified files. Languages come from
/// source-file extensions; dependencies and frameworks from the first
/// package manifest found among the config files. A missing, unreadable,
/// or malformed manifest degrades to empty dependency and framework lists
/// and never fails the report.
pub fn analyze_tech_stack(
    project_root: &Path,
    config_files: &[FileRecord],
    source_files: &[FileRecord],
) -> TechStack {
    let languages = detect_languages(source_files);

    let manifest = config_files
        .iter()
        .find(|record| record.path.ends_with(MANIFEST_FILENAME));

    let (dependencies, frameworks) = match manifest {
        Some(record) => match read_manifest(&project_root.join(&record.path)) {
            Ok(parsed) => extract_dependencies(&parsed),
            Err(err) => {
                eprintln!("Warning: {}", err);
                (Vec::new(), Vec::new())
            }
        },
        None => (Vec::new(), Vec::new()),
    };

    TechStack {
        languages,
        frameworks,
        dependencies,
    }
}

fn detect_languages(source_files: &[FileRecord]) -> Vec<String> {
    let mut languages = Vec::new();
    for record in source_files {
        let Some(extension) = record.extension.as_deref() else {
            continue;
        };
        let Some((_, language)) = LANGUAGE_MAP.iter().find(|(ext, _)| *ext == extension) else {
            continue;
        };
        if !languages.iter().any(|l| l == language) {
            languages.push((*language).to_string());
        }
    }
    languages
}

fn read_manifest(path: &Path) -> Result<PackageManifest, AnalysisError> {
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AnalysisError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merges runtime and development dependencies in declaration order (first
/// occurrence wins), caps the reported list at 20, and matches every merged
/// name against the framework table.
fn extract_dependencies(manifest: &PackageManifest) -> (Vec<String>, Vec<String>) {
    let mut merged: Vec<String> = Vec::new();
    for name in manifest
        .dependencies
        .keys()
        .chain(manifest.dev_dependencies.keys())
    {
        if !merged.iter().any(|n| n == name) {
            merged.push(name.clone());
        }
    }

    let mut frameworks: Vec<String> = Vec::new();
    for name in &merged {
        for (pattern, framework) in FRAMEWORK_PATTERNS {
            if name.contains(pattern) && !frameworks.iter().any(|f| f == framework) {
                frameworks.push((*framework).to_string());
            }
        }
    }

    merged.truncate(MAX_DEPENDENCIES);
    (merged, frameworks)
}
