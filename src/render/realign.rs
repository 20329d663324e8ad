//! Two-pass realignment of comparison reports.
//!
//! Pass 0 plans every data row and measures the widest left content to fix
//! the Diff column for the whole document. Pass 1 rewrites headers and data
//! rows against that column. Everything else is copied through untouched.

use super::layout::{pad_to, Alignment};
use super::row::{RowPlan, RowPlanner};
use super::{RealignOptions, RealignResult, RealignStats};
use crate::model::{Document, LineKind};
use crate::parser::Classifier;
use regex::Regex;

/// Header label written into the Diff column.
pub const DIFF_LABEL: &str = "Diff";

/// Only the header row containing this text receives [`DIFF_LABEL`].
pub const LABEL_ANCHOR: &str = "vs base";

/// Realign a document with the given options.
pub fn realign(doc: &Document, options: &RealignOptions) -> RealignResult {
    Realigner::new(options.clone()).realign(doc)
}

/// Realign report text, returning the rewritten text with a trailing newline.
pub fn realign_text(text: &str, options: &RealignOptions) -> String {
    realign(&Document::from_text(text), options).to_text()
}

/// Rewrites comparison tables so every row shares one Diff column.
pub struct Realigner {
    options: RealignOptions,
    classifier: Classifier,
    planner: RowPlanner,
    trailing_label_regex: Regex,
    delta_label_regex: Regex,
}

impl Realigner {
    /// Create a new realigner.
    pub fn new(options: RealignOptions) -> Self {
        Self {
            classifier: Classifier::new(options.classify.clone()),
            planner: RowPlanner::new(options.threshold),
            trailing_label_regex: Regex::new(r"(?i)\s+Diff\s*$").unwrap(),
            delta_label_regex: Regex::new(r"(?i)\s+Delta\b").unwrap(),
            options,
        }
    }

    /// Realign a whole document.
    pub fn realign(&self, doc: &Document) -> RealignResult {
        let kinds = self.classifier.classify(&doc.lines);

        // Pass 0: plan data rows and fix the Diff column.
        let plans: Vec<Option<RowPlan>> = doc
            .lines
            .iter()
            .zip(&kinds)
            .map(|(line, kind)| kind.is_data().then(|| self.planner.plan(line)))
            .collect();
        let alignment = Alignment::measure(plans.iter().flatten(), &self.options);

        // Pass 1: emit.
        let mut stats = RealignStats {
            alignment,
            ..RealignStats::default()
        };
        let mut output = Document::new();
        let mut in_fence = false;

        for ((line, kind), plan) in doc.lines.iter().zip(&kinds).zip(plans) {
            match kind {
                LineKind::Fence => {
                    if !in_fence {
                        stats.fenced_blocks += 1;
                    }
                    in_fence = !in_fence;
                    output.push_line(line.as_str());
                }
                LineKind::Header => {
                    stats.headers += 1;
                    output.push_line(self.rewrite_header(line, alignment));
                }
                LineKind::Data => match plan {
                    Some(plan) => {
                        stats.record(plan.outcome);
                        output.push_line(self.render_row(plan, alignment));
                    }
                    None => output.push_line(line.as_str()),
                },
                LineKind::Outside | LineKind::FootnoteOrMeta | LineKind::BlankOrEnvMeta => {
                    output.push_line(line.as_str());
                }
            }
        }

        log::debug!(
            "Realigned {} data rows ({} annotated) in {} fenced block(s)",
            stats.data_rows(),
            stats.annotated_rows(),
            stats.fenced_blocks
        );

        RealignResult {
            document: output,
            stats,
        }
    }

    /// Rewrite a header row to the document's Diff column geometry.
    ///
    /// Any previous `Diff`/`Delta` label and closing separator are dropped
    /// first, so rewriting an already aligned header is a no-op.
    pub fn rewrite_header(&self, line: &str, alignment: Alignment) -> String {
        let separator = self.options.classify.column_separator;
        let stripped = line.trim_end().trim_end_matches(separator).trim_end();
        let stripped = self.trailing_label_regex.replace(stripped, "");
        let stripped = self.delta_label_regex.replace_all(&stripped, "");

        let mut header = pad_to(&stripped, alignment.diff_column_start, self.options.min_gap);
        if line.contains(LABEL_ANCHOR) {
            header.push_str(DIFF_LABEL);
        }
        let mut header = pad_to(&header, alignment.right_boundary, 0);
        header.push(separator);
        header
    }

    fn render_row(&self, plan: RowPlan, alignment: Alignment) -> String {
        match plan.annotation {
            Some(annotation) => {
                let mut row = pad_to(&plan.left, alignment.diff_column_start, self.options.min_gap);
                row.push_str(&annotation.to_string());
                row
            }
            None => plan.left,
        }
    }
}

impl Default for Realigner {
    fn default() -> Self {
        Self::new(RealignOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(start: usize) -> Alignment {
        Alignment {
            diff_column_start: start,
            right_boundary: start + 14,
        }
    }

    #[test]
    fn test_rewrite_header_with_label() {
        let realigner = Realigner::default();
        let header = realigner.rewrite_header("     │ sec/op │ sec/op  vs base   │", alignment(40));
        let chars: Vec<char> = header.chars().collect();
        assert_eq!(chars.len(), 55);
        assert_eq!(chars[54], '│');
        let label: String = chars[40..44].iter().collect();
        assert_eq!(label, "Diff");
    }

    #[test]
    fn test_rewrite_header_without_label() {
        let realigner = Realigner::default();
        let header = realigner.rewrite_header("     │ old.txt │ new.txt │", alignment(40));
        assert!(!header.contains("Diff"));
        assert_eq!(header.chars().count(), 55);
        assert!(header.ends_with('│'));
    }

    #[test]
    fn test_rewrite_header_replaces_existing_labels() {
        let realigner = Realigner::default();
        let first = realigner.rewrite_header("  │ sec/op │ sec/op vs base Delta │", alignment(30));
        assert_eq!(first.matches("Diff").count(), 1);
        assert!(!first.contains("Delta"));

        let second = realigner.rewrite_header(&first, alignment(30));
        assert_eq!(second, first);
    }

    #[test]
    fn test_rewrite_header_wider_than_column() {
        let realigner = Realigner::default();
        let header = realigner.rewrite_header("│ a very long header vs base │", alignment(5));
        assert!(header.starts_with("│ a very long header vs base  Diff"));
        assert!(header.ends_with("Diff│"));
    }

    #[test]
    fn test_data_row_outside_fence_is_untouched() {
        let doc = Document::from_text("Enforce-8   150ns   120ns");
        let result = realign(&doc, &RealignOptions::default());
        assert_eq!(result.document, doc);
        assert_eq!(result.stats.data_rows(), 0);
    }

    #[test]
    fn test_realign_text_small_table() {
        let input = "```\nEnforce-8   150ns ± 2%   120ns ± 3%\ngeomean   0.00ns   5.00ns\n```\n";
        let output = realign_text(input, &RealignOptions::default());
        let lines: Vec<&str> = output.lines().collect();

        // Widest left content is "Enforce   150ns ± 2%   120ns ± 3%" (33 chars).
        let expected_row = format!("{:<37}-20.00% 🚀", "Enforce   150ns ± 2%   120ns ± 3%");
        assert_eq!(lines[1], expected_row);
        assert_eq!(lines[2], format!("{:<37}n/a (has zero)", "geomean"));
        assert!(output.ends_with("```\n"));
    }
}
