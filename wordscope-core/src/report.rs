//! Report rendering
//!
//! Turns frequency tables and whole [`FileReport`]s into console text.
//! Styling (bold file headers, underlined section titles) goes through the
//! `colored` crate and can be switched off for plain output.

use crate::types::{FileReport, WordCount};
use colored::Colorize;

/// Placeholder printed for a section with no words
pub const EMPTY_TABLE: &str = "None detected.";

/// Render a frequency table as `word : count` lines.
pub fn format_frequencies(entries: &[WordCount]) -> String {
    if entries.is_empty() {
        return EMPTY_TABLE.to_string();
    }
    entries
        .iter()
        .map(|entry| format!("{} : {}", entry.word, entry.count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Console renderer for per-file reports
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    styled: bool,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportRenderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn header(&self, text: String) -> String {
        if self.styled {
            text.bold().to_string()
        } else {
            text
        }
    }

    fn title(&self, text: String) -> String {
        if self.styled {
            text.underline().to_string()
        } else {
            text
        }
    }

    /// Render one file's report.
    ///
    /// Layout: a blank line, the file header, a blank line, then for every
    /// section a blank line, the title, a blank line and the table.
    pub fn render(&self, report: &FileReport) -> String {
        let mut out = String::new();

        let header = self.header(format!("Word findings for: {}", report.path.display()));
        out.push_str(&format!("\n{header}\n\n"));

        self.push_section(
            &mut out,
            "Most common non-punctuation words:".to_string(),
            &report.content_words,
        );
        for section in &report.by_pos {
            self.push_section(
                &mut out,
                format!("Most common {}s:", section.tag.label()),
                &section.entries,
            );
        }

        out
    }

    fn push_section(&self, out: &mut String, title: String, entries: &[WordCount]) {
        out.push_str(&format!(
            "\n{}\n\n{}\n",
            self.title(title),
            format_frequencies(entries)
        ));
    }
}
