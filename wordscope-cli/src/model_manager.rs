//! Model Manager - make sure the spaCy model is installed before analysis
//!
//! Checks whether the configured model package is importable by the Python
//! interpreter and runs `python -m spacy download <model>` when it is not.
//! Models given as a path to a local model directory are used as-is.

use std::path::Path;
use std::process::{Command, Stdio};
use wordscope_core::{AnalysisError, Result};

/// Exits 0 when the model package is installed, 1 when it is not and
/// 2 when spaCy itself cannot be imported.
const CHECK_SCRIPT: &str = r#"
import sys
try:
    import spacy.util
except ImportError:
    sys.exit(2)
sys.exit(0 if spacy.util.is_package(sys.argv[1]) else 1)
"#;

/// Manages spaCy model installation for the CLI
pub struct ModelManager {
    python: String,
}

impl ModelManager {
    pub fn new(python: &str) -> Self {
        Self {
            python: python.to_string(),
        }
    }

    /// A model name that points at an existing directory is a local model
    pub fn is_local_model_path(model: &str) -> bool {
        Path::new(model).is_dir()
    }

    fn check_command(&self, model: &str) -> Command {
        let mut command = Command::new(&self.python);
        command.arg("-c").arg(CHECK_SCRIPT).arg(model);
        command
    }

    fn download_command(&self, model: &str) -> Command {
        let mut command = Command::new(&self.python);
        command.args(["-m", "spacy", "download"]).arg(model);
        command
    }

    /// Check if the model package is already installed
    pub fn is_model_installed(&self, model: &str) -> Result<bool> {
        let status = self
            .check_command(model)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| {
                AnalysisError::unavailable(model, format!("failed to start {}: {e}", self.python))
            })?;

        match status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            Some(2) => Err(AnalysisError::unavailable(
                model,
                format!("spaCy is not installed for {}", self.python),
            )),
            _ => Err(AnalysisError::unavailable(
                model,
                format!("model check failed ({status})"),
            )),
        }
    }

    /// Ensure the model is available, downloading it if necessary
    pub fn ensure_model(&self, model: &str) -> Result<()> {
        if Self::is_local_model_path(model) {
            eprintln!("✅ Using local model directory: {}", model);
            return Ok(());
        }

        if self.is_model_installed(model)? {
            eprintln!("✅ spaCy model found: {}", model);
            return Ok(());
        }

        eprintln!("📦 spaCy model not found, downloading {}...", model);
        self.download_model(model)?;

        if self.is_model_installed(model)? {
            eprintln!("✅ spaCy model installed: {}", model);
            Ok(())
        } else {
            Err(AnalysisError::unavailable(
                model,
                "model still missing after download",
            ))
        }
    }

    fn download_model(&self, model: &str) -> Result<()> {
        // Download progress goes to stderr so stdout stays report-only
        let output = self
            .download_command(model)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                AnalysisError::unavailable(model, format!("failed to start {}: {e}", self.python))
            })?;

        let log = String::from_utf8_lossy(&output.stdout);
        for line in log.lines().filter(|l| !l.trim().is_empty()) {
            tracing::info!(target: "spacy_download", "{}", line);
        }

        if output.status.success() {
            Ok(())
        } else {
            Err(AnalysisError::unavailable(
                model,
                format!("`{} -m spacy download {}` failed ({})", self.python, model, output.status),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn test_download_command_format() {
        let manager = ModelManager::new("python3.11");
        let command = manager.download_command("en_core_web_sm");
        assert_eq!(command.get_program(), "python3.11");
        assert_eq!(args(&command), vec!["-m", "spacy", "download", "en_core_web_sm"]);
    }

    #[test]
    fn test_check_command_passes_model_as_argument() {
        let manager = ModelManager::new("python3");
        let command = manager.check_command("en_core_web_md");
        let args = args(&command);
        assert_eq!(args[0], "-c");
        assert_eq!(args[2], "en_core_web_md");
    }

    #[test]
    fn test_local_model_directory_skips_checks() {
        let dir = tempfile::tempdir().unwrap();
        // interpreter does not exist; a local directory must not need it
        let manager = ModelManager::new("wordscope-no-such-python-interpreter");
        let model = dir.path().to_str().unwrap();
        assert!(ModelManager::is_local_model_path(model));
        manager.ensure_model(model).unwrap();
    }

    #[test]
    fn test_missing_interpreter_is_resource_unavailable() {
        let manager = ModelManager::new("wordscope-no-such-python-interpreter");
        match manager.ensure_model("en_core_web_sm") {
            Err(AnalysisError::ResourceUnavailable { model, .. }) => assert_eq!(model, "en_core_web_sm"),
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
    }
}
