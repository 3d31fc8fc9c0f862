use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a wordscope run. None of these are retried.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The named language model (or the runtime hosting it) could not be loaded
    #[error("language model '{model}' is unavailable: {reason}")]
    ResourceUnavailable { model: String, reason: String },

    /// A document's bytes are not valid UTF-8
    #[error("failed to decode {} as UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report")]
    Output(#[from] std::io::Error),

    /// The analyzer backend answered with something we could not interpret
    #[error("analyzer protocol error: {0}")]
    Protocol(String),
}

impl AnalysisError {
    pub fn unavailable(model: &str, reason: impl Into<String>) -> Self {
        AnalysisError::ResourceUnavailable {
            model: model.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
