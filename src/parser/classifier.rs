//! Line classification for comparison reports.
//!
//! Table content only exists inside a fenced block. Inside the fence each
//! line is checked in a fixed order: footnote or diagnostic, header row,
//! blank or environment metadata, and finally data row.

use super::ClassifyOptions;
use crate::model::LineKind;
use regex::Regex;

/// Classifies report lines.
pub struct Classifier {
    options: ClassifyOptions,
    footnote_regex: Regex,
    samples_regex: Regex,
}

impl Classifier {
    /// Create a new classifier with the given options.
    pub fn new(options: ClassifyOptions) -> Self {
        Self {
            options,
            footnote_regex: Regex::new(r"^\s*[¹²³⁴⁵⁶⁷⁸⁹⁰]").unwrap(),
            samples_regex: Regex::new(r"need\s*>?=\s*\d+\s+samples").unwrap(),
        }
    }

    /// Get the classifier options.
    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Classify every line of a document, tracking fence state.
    ///
    /// The returned vector has one entry per input line.
    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LineKind> {
        let mut in_fence = false;
        let kinds: Vec<LineKind> = lines
            .iter()
            .map(|line| {
                let line = line.as_ref();
                if self.is_fence(line) {
                    in_fence = !in_fence;
                    LineKind::Fence
                } else if in_fence {
                    self.classify_table_line(line)
                } else {
                    LineKind::Outside
                }
            })
            .collect();

        log::debug!(
            "Classified {} lines ({} data rows)",
            kinds.len(),
            kinds.iter().filter(|k| k.is_data()).count()
        );
        kinds
    }

    /// Classify a line known to be inside a fence.
    pub fn classify_table_line(&self, line: &str) -> LineKind {
        if self.is_footnote(line) {
            LineKind::FootnoteOrMeta
        } else if self.is_header(line) {
            LineKind::Header
        } else if self.is_blank_or_env(line) {
            LineKind::BlankOrEnvMeta
        } else {
            LineKind::Data
        }
    }

    /// Whether the line toggles the fence.
    pub fn is_fence(&self, line: &str) -> bool {
        line.trim() == self.options.fence_marker
    }

    /// Superscript footnote or a `need >= N samples` diagnostic.
    pub fn is_footnote(&self, line: &str) -> bool {
        self.footnote_regex.is_match(line) || self.samples_regex.is_match(line)
    }

    /// Separator glyph plus one of the header keywords.
    pub fn is_header(&self, line: &str) -> bool {
        line.contains(self.options.column_separator)
            && self
                .options
                .header_keywords
                .iter()
                .any(|keyword| line.contains(keyword.as_str()))
    }

    /// Blank line or environment metadata such as `goos: linux`.
    pub fn is_blank_or_env(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.is_empty()
            || self
                .options
                .meta_prefixes
                .iter()
                .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifyOptions::default())
    }
}
