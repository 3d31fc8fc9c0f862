//! spaCy analyzer
//!
//! Runs a pretrained spaCy pipeline in a long-lived Python worker and talks
//! to it over stdin/stdout (see [`protocol`]).
//!
//! # Resource Management
//! The caller is responsible for a Python interpreter with `spacy` and the
//! requested model installed (the CLI's `ModelManager` can download the
//! model). This crate only starts the worker and reports failures.
//!
//! # Worker Lifecycle
//! The worker is spawned on the first `analyze` call and loads the model
//! once. Every later call reuses it. Dropping the analyzer closes the
//! worker's stdin and waits for it to exit.

pub mod protocol;

use crate::analyzers::traits::LanguageAnalyzer;
use crate::error::{AnalysisError, Result};
use crate::types::{Document, Token};
use protocol::{decode_response, encode_request, WorkerResponse, BRIDGE_SCRIPT};
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tracing::{debug, info};

/// Model loaded when none is configured
pub const DEFAULT_MODEL: &str = "en_core_web_sm";

/// Interpreter used when none is configured
pub const DEFAULT_PYTHON: &str = "python3";

pub struct SpacyAnalyzer {
    python: String,
    model: String,
    worker: Option<Worker>,
}

impl SpacyAnalyzer {
    /// Analyzer for `model` using the default `python3` interpreter
    pub fn new(model: &str) -> Self {
        Self::with_python(DEFAULT_PYTHON, model)
    }

    pub fn with_python(python: &str, model: &str) -> Self {
        Self {
            python: python.to_string(),
            model: model.to_string(),
            worker: None,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the worker has been started and the model loaded
    pub fn is_loaded(&self) -> bool {
        self.worker.is_some()
    }

    fn worker(&mut self) -> Result<&mut Worker> {
        if self.worker.is_none() {
            self.worker = Some(Worker::spawn(&self.python, &self.model)?);
        }
        self.worker
            .as_mut()
            .ok_or_else(|| AnalysisError::unavailable(&self.model, "worker was not started"))
    }
}

impl LanguageAnalyzer for SpacyAnalyzer {
    fn analyze(&mut self, text: &str) -> Result<Document> {
        let worker = self.worker()?;
        let tokens = worker.analyze(text)?;
        debug!(tokens = tokens.len(), "spaCy analysis complete");
        Ok(Document::new(text, tokens))
    }

    fn name(&self) -> &str {
        "SpacyAnalyzer"
    }
}

/// Running Python worker with the model loaded
struct Worker {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl Worker {
    fn spawn(python: &str, model: &str) -> Result<Self> {
        info!(python, model, "starting spaCy worker");

        let mut child = Command::new(python)
            .arg("-c")
            .arg(BRIDGE_SCRIPT)
            .arg(model)
            .env("PYTHONIOENCODING", "utf-8")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| AnalysisError::unavailable(model, format!("failed to start {python}: {e}")))?;

        let stdin = child.stdin.take();
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AnalysisError::unavailable(model, "worker stdout was not captured"))?;

        let mut worker = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        };

        // Startup failures (no spaCy, unknown model) surface as unavailable
        // resources rather than protocol errors.
        match worker.read_response() {
            Ok(WorkerResponse::Ready { model: loaded }) => {
                info!(model = %loaded, "spaCy model ready");
                Ok(worker)
            }
            Ok(WorkerResponse::Failed { message }) => Err(AnalysisError::unavailable(model, message)),
            Ok(other) => Err(AnalysisError::Protocol(format!(
                "expected ready message from worker, got {other:?}"
            ))),
            Err(e) => {
                let status = worker.child.try_wait().ok().flatten();
                Err(AnalysisError::unavailable(
                    model,
                    match status {
                        Some(status) => format!("worker exited during startup ({status})"),
                        None => e.to_string(),
                    },
                ))
            }
        }
    }

    fn analyze(&mut self, text: &str) -> Result<Vec<Token>> {
        let request = encode_request(text)?;
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| AnalysisError::Protocol("worker stdin is closed".to_string()))?;
        stdin
            .write_all(request.as_bytes())
            .and_then(|_| stdin.flush())
            .map_err(|e| AnalysisError::Protocol(format!("failed to send text to worker: {e}")))?;

        match self.read_response()? {
            WorkerResponse::Analyzed { tokens } => Ok(tokens),
            WorkerResponse::Failed { message } => Err(AnalysisError::Protocol(format!(
                "worker failed to analyze text: {message}"
            ))),
            WorkerResponse::Ready { .. } => Err(AnalysisError::Protocol(
                "unexpected ready message from worker".to_string(),
            )),
        }
    }

    fn read_response(&mut self) -> Result<WorkerResponse> {
        let mut line = String::new();
        let read = self
            .stdout
            .read_line(&mut line)
            .map_err(|e| AnalysisError::Protocol(format!("failed to read from worker: {e}")))?;
        if read == 0 {
            return Err(AnalysisError::Protocol("worker closed its output".to_string()));
        }
        decode_response(&line)
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Closing stdin ends the worker's request loop
        drop(self.stdin.take());
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_python3() {
        let analyzer = SpacyAnalyzer::new(DEFAULT_MODEL);
        assert_eq!(analyzer.python, "python3");
        assert_eq!(analyzer.model(), "en_core_web_sm");
        assert!(!analyzer.is_loaded());
    }

    #[test]
    fn test_missing_interpreter_is_resource_unavailable() {
        let mut analyzer =
            SpacyAnalyzer::with_python("wordscope-no-such-python-interpreter", DEFAULT_MODEL);
        match analyzer.analyze("text") {
            Err(AnalysisError::ResourceUnavailable { model, reason }) => {
                assert_eq!(model, "en_core_web_sm");
                assert!(reason.contains("wordscope-no-such-python-interpreter"));
            }
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
        assert!(!analyzer.is_loaded());
    }

    /// Write an executable shell script that stands in for the Python worker
    #[cfg(unix)]
    fn fake_python(dir: &std::path::Path, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-python");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[cfg(unix)]
    #[test]
    fn test_startup_error_is_resource_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let python = fake_python(
            dir.path(),
            r#"printf '{"status":"error","message":"spaCy is not installed: No module named spacy"}\n'
exit 3"#,
        );

        let mut analyzer = SpacyAnalyzer::with_python(&python, DEFAULT_MODEL);
        match analyzer.analyze("text") {
            Err(AnalysisError::ResourceUnavailable { model, reason }) => {
                assert_eq!(model, "en_core_web_sm");
                assert_eq!(reason, "spaCy is not installed: No module named spacy");
            }
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
        assert!(!analyzer.is_loaded());
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_exit_during_startup_is_resource_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let python = fake_python(dir.path(), "exit 1");

        let mut analyzer = SpacyAnalyzer::with_python(&python, "en_core_web_md");
        match analyzer.analyze("text") {
            Err(AnalysisError::ResourceUnavailable { model, .. }) => assert_eq!(model, "en_core_web_md"),
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_worker_is_reused_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let python = fake_python(
            dir.path(),
            r#"printf '{"status":"ready","model":"en_core_web_sm"}\n'
n=0
while read -r line; do
  n=$((n + 1))
  printf '{"status":"ok","tokens":[{"text":"call%d","is_stop":false,"is_space":false,"pos":"NOUN"}]}\n' "$n"
done"#,
        );

        let mut analyzer = SpacyAnalyzer::with_python(&python, DEFAULT_MODEL);
        let first = analyzer.analyze("first text").unwrap();
        assert!(analyzer.is_loaded());
        let second = analyzer.analyze("second text").unwrap();

        assert_eq!(first.text, "first text");
        assert_eq!(first.tokens, vec![Token::new("call1", "NOUN")]);
        // A fresh worker would answer "call1" again
        assert_eq!(second.tokens, vec![Token::new("call2", "NOUN")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_worker_dying_after_ready_is_protocol_error() {
        let dir = tempfile::tempdir().unwrap();
        let python = fake_python(
            dir.path(),
            r#"printf '{"status":"ready","model":"en_core_web_sm"}\n'
exit 0"#,
        );

        let mut analyzer = SpacyAnalyzer::with_python(&python, DEFAULT_MODEL);
        assert!(matches!(analyzer.analyze("text"), Err(AnalysisError::Protocol(_))));
    }
}
