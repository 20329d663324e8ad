//! Realignment result with statistics.

use super::layout::Alignment;
use super::row::RowOutcome;
use crate::model::Document;

/// Result of realigning a document.
#[derive(Debug, Clone)]
pub struct RealignResult {
    /// The rewritten document
    pub document: Document,

    /// Statistics collected while rewriting
    pub stats: RealignStats,
}

impl RealignResult {
    /// Rewritten document text with a trailing newline.
    pub fn to_text(&self) -> String {
        self.document.to_text()
    }
}

/// Statistics collected during realignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealignStats {
    /// Diff column geometry used for the document
    pub alignment: Alignment,

    /// Number of fenced blocks
    pub fenced_blocks: u32,

    /// Number of header rows rewritten
    pub headers: u32,

    /// Rows whose change was recomputed from measurements
    pub recomputed: u32,

    /// Rows with two zero measurements
    pub zero_pairs: u32,

    /// geomean rows reported as undefined
    pub geomean_undefined: u32,

    /// Rows whose existing percentage was carried over
    pub carried: u32,

    /// Rows with an unreadable percentage
    pub malformed: u32,

    /// Data rows left without an annotation
    pub passed_through: u32,
}

impl RealignStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one data row outcome.
    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Recomputed => self.recomputed += 1,
            RowOutcome::ZeroPair => self.zero_pairs += 1,
            RowOutcome::GeomeanUndefined => self.geomean_undefined += 1,
            RowOutcome::Carried => self.carried += 1,
            RowOutcome::Malformed => self.malformed += 1,
            RowOutcome::PassThrough => self.passed_through += 1,
        }
    }

    /// Total data rows seen.
    pub fn data_rows(&self) -> u32 {
        self.recomputed
            + self.zero_pairs
            + self.geomean_undefined
            + self.carried
            + self.malformed
            + self.passed_through
    }

    /// Data rows that received a Diff annotation.
    pub fn annotated_rows(&self) -> u32 {
        self.recomputed + self.zero_pairs + self.geomean_undefined + self.carried
    }
}
