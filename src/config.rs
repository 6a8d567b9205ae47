use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

/// Analysis parameters with documented defaults. Every field can be
/// overridden per invocation from the CLI or a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum traversal depth in path segments below the project root.
    pub max_depth: usize,
    /// Glob-style patterns whose match prunes an entire subtree.
    pub exclude_patterns: Vec<String>,
    /// Extensions (without the leading dot) visible to the analysis;
    /// files outside this set are skipped entirely.
    pub include_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 5,
            exclude_patterns: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "dist".to_string(),
                "build".to_string(),
                ".next".to_string(),
                "coverage".to_string(),
                ".nyc_output".to_string(),
            ],
            include_extensions: vec![
                "ts".to_string(),
                "tsx".to_string(),
                "js".to_string(),
                "jsx".to_string(),
                "py".to_string(),
                "java".to_string(),
                "go".to_string(),
                "rs".to_string(),
                "md".to_string(),
                "json".to_string(),
                "yaml".to_string(),
                "yml".to_string(),
                "toml".to_string(),
                "xml".to_string(),
            ],
        }
    }
}

/// Strips a leading dot and lowercases, so ".TS" and "ts" compare equal.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

impl Config {
    /// Get the default config file path (~/.codebase-scout.toml)
    pub fn default_config_path() -> crate::Result<PathBuf> {
        let home_dir = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(PathBuf::from(home_dir).join(".codebase-scout.toml"))
    }

    /// Load config from the default location, falling back to defaults if
    /// no file exists there.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            println!("📝 Loading configuration from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific file path
    pub fn from_file(path: &PathBuf) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a file
    pub fn to_file(&self, path: &PathBuf) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create a config file with all available options documented
    pub fn create_documented_config() -> String {
        r#"# Codebase Scout Configuration File
# This file configures how codebase-scout analyzes a project directory

# Maximum directory traversal depth (path segments below the root)
max_depth = 5

# Patterns to exclude during traversal; a match prunes the whole subtree
exclude_patterns = [
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "coverage",
    ".nyc_output"
]

# File extensions visible to the analysis (leading dot optional)
include_extensions = [
    "ts", "tsx", "js", "jsx", "py", "java", "go", "rs",
    "md", "json", "yaml", "yml", "toml", "xml"
]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_manifest_and_markdown() {
        let config = Config::default();
        assert_eq!(config.max_depth, 5);
        assert!(config.exclude_patterns.contains(&"node_modules".to_string()));
        assert!(config.include_extensions.contains(&"json".to_string()));
        assert!(config.include_extensions.contains(&"md".to_string()));
    }

    #[test]
    fn normalize_extension_strips_dot_and_case() {
        assert_eq!(normalize_extension(".TS"), "ts");
        assert_eq!(normalize_extension("md"), "md");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.toml");
        let mut config = Config::default();
        config.max_depth = 2;
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.max_depth, 2);
        assert_eq!(loaded.exclude_patterns, config.exclude_patterns);
    }

    #[test]
    fn documented_config_parses() {
        let config: Config = toml::from_str(&Config::create_documented_config()).unwrap();
        assert_eq!(config.max_depth, 5);
    }
}
