use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for the analysis pipeline.
///
/// `PathNotFound` and `Walk` are fatal and abort the whole operation.
/// The manifest variants are recoverable: they are caught inside the
/// manifest analyzer, logged as a warning, and degrade the report to an
/// empty dependency/framework section.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("project path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
