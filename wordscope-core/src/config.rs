use crate::analyzers::spacy::{DEFAULT_MODEL, DEFAULT_PYTHON};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory scanned for documents, relative to the working directory
pub const RESEARCH_ROOT: &str = "research";

/// File extension (without the dot) of the documents that get reported
pub const DOCUMENT_EXTENSION: &str = "md";

/// Rows per frequency table
pub const DEFAULT_TOP_N: usize = 10;

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_python() -> String {
    DEFAULT_PYTHON.to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// spaCy model package name (or path to a model directory)
    #[serde(default = "default_model")]
    pub model: String,
    /// Number of rows in every frequency table
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Python interpreter hosting the spaCy worker
    #[serde(default = "default_python")]
    pub python: String,
    /// Download the model on startup when it is not installed
    #[serde(default = "default_true")]
    pub auto_download: bool,
    /// Bold/underline headers in the report
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            top_n: DEFAULT_TOP_N,
            python: default_python(),
            auto_download: true,
            color: true,
        }
    }
}

impl AnalysisConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                tracing::warn!(path = %p.display(), error = %e, "failed to load config, using defaults");
                eprintln!("⚠️  Failed to load config from {}, using defaults", p.display());
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
