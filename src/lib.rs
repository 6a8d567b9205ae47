pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;
pub mod requirements;
pub mod walker;

pub use analyzer::Analyzer;
pub use config::Config;
pub use error::AnalysisError;
pub use report::{FileRecord, ProjectReport, TechStack};

pub type Result<T> = anyhow::Result<T>;
