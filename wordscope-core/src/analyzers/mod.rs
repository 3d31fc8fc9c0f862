//! Language Analyzers
//!
//! This module provides the analysis layer that turns cleaned text into an
//! annotated [`Document`](crate::types::Document).
//!
//! ## Architecture
//!
//! ```text
//! Cleaned text
//!     ↓
//! [LanguageAnalyzer]  (spaCy worker process, or a fake in tests)
//!     ↓
//! Document (tokens with stop/space flags and POS tags)
//!     ↓
//! [Word extraction → counting → report]
//! ```
//!
//! ## Available Analyzers
//!
//! - `SpacyAnalyzer` - pretrained spaCy pipeline hosted in a Python worker

pub mod spacy;
pub mod traits;

pub use spacy::{SpacyAnalyzer, DEFAULT_MODEL};
pub use traits::{build_document, LanguageAnalyzer};
