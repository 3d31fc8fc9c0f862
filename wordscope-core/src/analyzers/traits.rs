// Language analyzer abstraction
//
// This is the boundary between our orchestration (cleaning, extraction,
// counting, rendering) and the external NLP engine that tokenizes and tags
// text. Everything after `analyze` works on a plain `Document` and never
// touches the engine again.

use crate::error::Result;
use crate::types::Document;

/// Analyzer trait - converts cleaned text into an annotated Document
///
/// Implementations own whatever model resource they need and may load it
/// lazily on the first call. A model that cannot be located or loaded is
/// reported as `AnalysisError::ResourceUnavailable`.
pub trait LanguageAnalyzer {
    /// Tokenize and tag `text`, returning tokens in document order
    fn analyze(&mut self, text: &str) -> Result<Document>;

    /// Analyzer name for debugging/logging
    fn name(&self) -> &str;
}

/// Build an annotated document with the given analyzer
pub fn build_document(analyzer: &mut dyn LanguageAnalyzer, text: &str) -> Result<Document> {
    analyzer.analyze(text)
}
