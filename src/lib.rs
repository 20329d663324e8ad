//! # benchdiff
//!
//! Post-processing for benchstat comparison reports.
//!
//! benchstat prints one table per metric with the baseline and new
//! measurements side by side. This library rewrites those tables so that a
//! single, freshly computed `Diff` column lines up across every table of the
//! report, each change tagged with a trend icon.
//!
//! ## Quick Start
//!
//! ```no_run
//! use benchdiff::{realign_file, RealignOptions, RealignOutcome};
//!
//! fn main() -> benchdiff::Result<()> {
//!     match realign_file("comparison.md", &RealignOptions::default())? {
//!         RealignOutcome::Rewritten(stats) => println!("{} rows", stats.data_rows()),
//!         RealignOutcome::Skipped => println!("nothing to do"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One Diff column**: measured once over the whole document
//! - **Recomputed changes**: from the raw numbers, not benchstat's rounding
//! - **Trend icons**: 🐌 regression, 🚀 improvement, ➡️ steady
//! - **Idempotent**: realigning a realigned report changes nothing
//! - **Dashboard data**: formatting, merging and history updates for
//!   benchmark results (see [`data`])

pub mod data;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, LineKind, MeasurementPair, NumericToken, Unit, UnitFamily};
pub use parser::{Classifier, ClassifyOptions, Extractor};
pub use render::{
    realign, realign_text, Annotation, Alignment, RealignOptions, RealignResult, RealignStats,
    Realigner, RowOutcome, Trend,
};

use std::path::Path;

/// Default report location, relative to the working directory.
pub const DEFAULT_REPORT: &str = "comparison.md";

/// What [`realign_file`] did with its input.
#[derive(Debug, Clone, PartialEq)]
pub enum RealignOutcome {
    /// The report did not exist; nothing was written.
    Skipped,
    /// The report was rewritten in place.
    Rewritten(RealignStats),
}

/// Realign a comparison report in place.
///
/// A missing report is not an error: it yields [`RealignOutcome::Skipped`]
/// and no file is created.
///
/// # Example
///
/// ```no_run
/// use benchdiff::{realign_file, RealignOptions};
///
/// let outcome = realign_file("comparison.md", &RealignOptions::default()).unwrap();
/// println!("{:?}", outcome);
/// ```
pub fn realign_file<P: AsRef<Path>>(path: P, options: &RealignOptions) -> Result<RealignOutcome> {
    BenchDiff::new().with_options(options.clone()).realign_file(path)
}

/// Realign report text with default options.
///
/// ```
/// let out = benchdiff::realign_str("```\ngeomean   0.00ns   5.00ns\n```\n");
/// assert!(out.contains("n/a (has zero)"));
/// ```
pub fn realign_str(text: &str) -> String {
    realign_text(text, &RealignOptions::default())
}

/// Builder for realigning reports.
///
/// # Example
///
/// ```no_run
/// use benchdiff::BenchDiff;
///
/// let outcome = BenchDiff::new()
///     .with_threshold(5.0)
///     .with_column_padding(2)
///     .realign_file("comparison.md")?;
/// # Ok::<(), benchdiff::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BenchDiff {
    options: RealignOptions,
}

impl BenchDiff {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all realignment options.
    pub fn with_options(mut self, options: RealignOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the regression/improvement threshold in percent.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.options = self.options.with_threshold(threshold);
        self
    }

    /// Set the padding between the widest row and the Diff column.
    pub fn with_column_padding(mut self, padding: usize) -> Self {
        self.options = self.options.with_column_padding(padding);
        self
    }

    /// Set the width reserved for annotations.
    pub fn with_annotation_width(mut self, width: usize) -> Self {
        self.options = self.options.with_annotation_width(width);
        self
    }

    /// Set the fence marker delimiting report tables.
    pub fn with_fence_marker(mut self, marker: impl Into<String>) -> Self {
        let classify = self.options.classify.clone().with_fence_marker(marker);
        self.options = self.options.with_classify(classify);
        self
    }

    /// Options the builder will realign with.
    pub fn options(&self) -> &RealignOptions {
        &self.options
    }

    /// Realign a document held in memory.
    pub fn realign(&self, doc: &Document) -> RealignResult {
        realign(doc, &self.options)
    }

    /// Realign a report file in place.
    pub fn realign_file<P: AsRef<Path>>(&self, path: P) -> Result<RealignOutcome> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("{} does not exist, skipping", path.display());
            return Ok(RealignOutcome::Skipped);
        }

        let doc = Document::read(path)?;
        let result = self.realign(&doc);
        result.document.write(path)?;

        log::info!(
            "Realigned {}: {} rows, Diff column at {}",
            path.display(),
            result.stats.data_rows(),
            result.stats.alignment.diff_column_start
        );
        Ok(RealignOutcome::Rewritten(result.stats))
    }
}
