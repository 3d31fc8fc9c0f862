use crate::analyzers::{build_document, LanguageAnalyzer, SpacyAnalyzer};
use crate::config::{AnalysisConfig, DOCUMENT_EXTENSION};
use crate::counter::most_common_words;
use crate::error::{AnalysisError, Result};
use crate::extractor::{content_words, words_for_tag};
use crate::normalizer::clean_text;
use crate::report::ReportRenderer;
use crate::types::*;
use crate::walker::find_documents;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        eprintln!("⏱️  {}: {:.0}ms", step_name, elapsed.as_millis());

        result
    }

    /// Total time per step name, in first-recorded order
    pub fn totals(&self) -> Vec<(String, Duration)> {
        let mut totals: Vec<(String, Duration)> = Vec::new();
        for (step, duration) in &self.timings {
            match totals.iter_mut().find(|(name, _)| name == step) {
                Some((_, total)) => *total += *duration,
                None => totals.push((step.clone(), *duration)),
            }
        }
        totals
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        eprintln!("\n📊 Performance Summary:");
        let totals = self.totals();
        let total: Duration = totals.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &totals {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            eprintln!(
                "   {:.<35} {:.0}ms ({:.1}%)",
                step,
                duration.as_millis(),
                percentage
            );
        }
        eprintln!("   {:.<35} {:.0}ms", "Total", total.as_millis());
    }
}

/// Build the per-file report from an annotated document.
///
/// One content-word table, then one table per universal POS tag in
/// `PosTag::ALL` order. Tokens tagged outside that set never appear.
pub fn build_report(path: &Path, doc: &Document, top_n: usize) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        content_words: most_common_words(&content_words(doc), top_n),
        by_pos: PosTag::ALL
            .iter()
            .map(|&tag| PosSection {
                tag,
                entries: most_common_words(&words_for_tag(doc, tag), top_n),
            })
            .collect(),
    }
}

/// Read a document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| AnalysisError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub struct WordFrequencyProcessor {
    analyzer: Box<dyn LanguageAnalyzer>,
    renderer: ReportRenderer,
    top_n: usize,
}

impl WordFrequencyProcessor {
    /// Create processor with an injected analyzer
    pub fn new_with_dependencies(analyzer: Box<dyn LanguageAnalyzer>, config: &AnalysisConfig) -> Self {
        Self {
            analyzer,
            renderer: ReportRenderer::new(config.color),
            top_n: config.top_n,
        }
    }

    /// Convenience constructor for CLI usage with the spaCy worker
    pub fn new_spacy(config: &AnalysisConfig) -> Self {
        let analyzer = Box::new(SpacyAnalyzer::with_python(&config.python, &config.model));
        Self::new_with_dependencies(analyzer, config)
    }

    pub fn analyzer_name(&self) -> &str {
        self.analyzer.name()
    }

    /// Clean, analyze and count one document's text
    pub fn analyze_text(&mut self, path: &Path, text: &str) -> Result<FileReport> {
        self.analyze_text_with_profiler(path, text, &mut StepProfiler::new(false))
    }

    fn analyze_text_with_profiler(
        &mut self,
        path: &Path,
        text: &str,
        profiler: &mut StepProfiler,
    ) -> Result<FileReport> {
        let cleaned = clean_text(text);
        let analyzer = &mut *self.analyzer;
        let doc = profiler.time_step("Analyze", || build_document(analyzer, &cleaned))?;
        debug!(path = %path.display(), tokens = doc.len(), "document analyzed");

        let top_n = self.top_n;
        Ok(profiler.time_step("Count", || build_report(path, &doc, top_n)))
    }

    /// Read and analyze a single file
    pub fn process_file(&mut self, path: &Path) -> Result<FileReport> {
        let text = read_document(path)?;
        self.analyze_text(path, &text)
    }

    /// Report on every document under `root`, writing to `out`.
    ///
    /// Returns the number of files reported. The first error aborts the run.
    pub fn run<W: Write>(&mut self, root: &Path, out: &mut W) -> Result<usize> {
        self.run_with_profiling(root, out, false)
    }

    pub fn run_with_profiling<W: Write>(
        &mut self,
        root: &Path,
        out: &mut W,
        enable_profiling: bool,
    ) -> Result<usize> {
        let mut profiler = StepProfiler::new(enable_profiling);
        let documents = find_documents(root, DOCUMENT_EXTENSION)?;
        info!(root = %root.display(), files = documents.len(), "scanning documents");

        for path in &documents {
            let text = profiler.time_step("Read", || read_document(path))?;
            let report = self.analyze_text_with_profiler(path, &text, &mut profiler)?;
            out.write_all(self.renderer.render(&report).as_bytes())?;
            out.flush()?;
        }

        profiler.print_summary();
        Ok(documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Tags whitespace-separated words from a fixed lexicon
    struct LexiconAnalyzer;

    impl LanguageAnalyzer for LexiconAnalyzer {
        fn analyze(&mut self, text: &str) -> Result<Document> {
            let tokens = text
                .split_whitespace()
                .map(|word| match word {
                    "the" | "The" => Token::new(word, "DET").stop(),
                    "." => Token::new(word, "PUNCT"),
                    "and" => Token::new(word, "CCONJ").stop(),
                    "runs" | "sleeps" => Token::new(word, "VERB"),
                    _ => Token::new(word, "NOUN"),
                })
                .collect();
            Ok(Document::new(text, tokens))
        }

        fn name(&self) -> &str {
            "LexiconAnalyzer"
        }
    }

    fn processor(top_n: usize) -> WordFrequencyProcessor {
        let config = AnalysisConfig {
            top_n,
            color: false,
            ..AnalysisConfig::default()
        };
        WordFrequencyProcessor::new_with_dependencies(Box::new(LexiconAnalyzer), &config)
    }

    #[test]
    fn test_report_has_one_section_per_tag() {
        let mut processor = processor(10);
        let report = processor
            .analyze_text(Path::new("a.md"), "The cat runs and the dog sleeps .")
            .unwrap();

        assert_eq!(report.by_pos.len(), 17);
        let tags: Vec<PosTag> = report.by_pos.iter().map(|s| s.tag).collect();
        assert_eq!(tags, PosTag::ALL.to_vec());

        let words: Vec<&str> = report.content_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "runs", "dog", "sleeps"]);

        let det = &report.by_pos[5];
        assert_eq!(det.tag, PosTag::Det);
        assert_eq!(det.entries, vec![WordCount::new("The", 1), WordCount::new("the", 1)]);
        assert!(report.by_pos[0].entries.is_empty());
    }

    #[test]
    fn test_newlines_are_removed_before_analysis() {
        let mut processor = processor(10);
        // "fox\nfox" becomes one token "foxfox" once newlines are stripped
        let report = processor.analyze_text(Path::new("a.md"), "fox\nfox fox").unwrap();
        assert_eq!(
            report.content_words,
            vec![WordCount::new("foxfox", 1), WordCount::new("fox", 1)]
        );
    }

    #[test]
    fn test_top_n_limits_every_table() {
        let mut processor = processor(1);
        let report = processor
            .analyze_text(Path::new("a.md"), "cat dog dog runs sleeps sleeps")
            .unwrap();
        assert_eq!(report.content_words, vec![WordCount::new("dog", 2)]);
        assert!(report.by_pos.iter().all(|s| s.entries.len() <= 1));
    }

    #[test]
    fn test_read_document_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        std::fs::write(&path, b"fo\xff\xfe").unwrap();

        match read_document(&path) {
            Err(AnalysisError::Decode { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_on_missing_root_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let count = processor(10)
            .run(&dir.path().join("research"), &mut out)
            .unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_profiler_totals_merge_repeated_steps() {
        let mut profiler = StepProfiler::new(true);
        profiler.time_step("Read", || ());
        profiler.time_step("Analyze", || ());
        profiler.time_step("Read", || ());
        let names: Vec<String> = profiler.totals().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Read".to_string(), "Analyze".to_string()]);
    }

    #[test]
    fn test_build_report_uses_path() {
        let doc = Document::new("", Vec::new());
        let report = build_report(Path::new("research/x.md"), &doc, 10);
        assert_eq!(report.path, PathBuf::from("research/x.md"));
        assert!(report.content_words.is_empty());
    }
}
