// Wordscope Core Library
//
// Word frequency reports over Markdown notes: overall content words plus
// the most common words for each universal part-of-speech tag.
// Tokenizing and tagging are delegated to a pluggable LanguageAnalyzer.

pub mod analyzers;
pub mod config;
pub mod counter;
pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod processor;
pub mod report;
pub mod types;
pub mod walker;

// Re-export main types and functions for easy use
pub use analyzers::{build_document, LanguageAnalyzer, SpacyAnalyzer};
pub use config::{AnalysisConfig, DOCUMENT_EXTENSION, RESEARCH_ROOT};
pub use counter::most_common_words;
pub use error::{AnalysisError, Result};
pub use extractor::{content_words, words_by_pos};
pub use normalizer::clean_text;
pub use processor::{build_report, WordFrequencyProcessor};
pub use report::{format_frequencies, ReportRenderer};
pub use types::*;
pub use walker::find_documents;
