//! Wire format between [`SpacyAnalyzer`](super::SpacyAnalyzer) and its
//! Python worker.
//!
//! One JSON object per line in each direction. Requests carry the text to
//! analyze; responses are tagged by `status`:
//!
//! ```text
//! → {"text": "The fox runs."}
//! ← {"status": "ready", "model": "en_core_web_sm"}          (once, at startup)
//! ← {"status": "ok", "tokens": [{"text": "The", "is_stop": true, ...}]}
//! ← {"status": "error", "message": "..."}
//! ```

use crate::error::{AnalysisError, Result};
use crate::types::Token;
use serde::{Deserialize, Serialize};

/// Worker program run by the Python interpreter. Takes the model name as
/// its only argument, loads it once, then answers requests until stdin closes.
pub const BRIDGE_SCRIPT: &str = r#"
import json
import sys


def emit(payload):
    sys.stdout.write(json.dumps(payload) + "\n")
    sys.stdout.flush()


try:
    import spacy
except ImportError as exc:
    emit({"status": "error", "message": "spaCy is not installed: %s" % exc})
    sys.exit(3)

try:
    nlp = spacy.load(sys.argv[1])
except Exception as exc:
    emit({"status": "error", "message": str(exc)})
    sys.exit(3)

emit({"status": "ready", "model": "%s_%s" % (nlp.meta.get("lang", ""), nlp.meta.get("name", ""))})

for line in sys.stdin:
    if not line.strip():
        continue
    try:
        doc = nlp(json.loads(line)["text"])
        emit({
            "status": "ok",
            "tokens": [
                {"text": t.text, "is_stop": t.is_stop, "is_space": t.is_space, "pos": t.pos_}
                for t in doc
            ],
        })
    except Exception as exc:
        emit({"status": "error", "message": str(exc)})
"#;

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status")]
pub enum WorkerResponse {
    #[serde(rename = "ready")]
    Ready {
        #[serde(default)]
        model: String,
    },
    #[serde(rename = "ok")]
    Analyzed { tokens: Vec<Token> },
    #[serde(rename = "error")]
    Failed { message: String },
}

/// Encode a request as a single newline-terminated line
pub fn encode_request(text: &str) -> Result<String> {
    let mut line = serde_json::to_string(&AnalyzeRequest { text })
        .map_err(|e| AnalysisError::Protocol(format!("failed to encode request: {e}")))?;
    line.push('\n');
    Ok(line)
}

pub fn decode_response(line: &str) -> Result<WorkerResponse> {
    serde_json::from_str(line.trim_end()).map_err(|e| {
        AnalysisError::Protocol(format!("malformed worker response ({e}): {}", line.trim_end()))
    })
}
