//! Realignment options and configuration.

use crate::parser::ClassifyOptions;

/// Spaces between the widest row and the Diff column.
pub const DEFAULT_COLUMN_PADDING: usize = 4;

/// Width reserved for an annotation such as `+100.00% 🚀`.
pub const DEFAULT_ANNOTATION_WIDTH: usize = 14;

/// Minimum gap when a row already reaches the Diff column.
pub const DEFAULT_MIN_GAP: usize = 2;

/// Percent change beyond which a row is flagged.
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// Options for rewriting a comparison report.
#[derive(Debug, Clone)]
pub struct RealignOptions {
    /// Line classification settings
    pub classify: ClassifyOptions,

    /// Spaces added after the widest data row to place the Diff column
    pub column_padding: usize,

    /// Width of the Diff column up to the closing separator
    pub annotation_width: usize,

    /// Spaces inserted when content already reaches the Diff column
    pub min_gap: usize,

    /// Absolute percent change above which a row is a regression or an
    /// improvement
    pub threshold: f64,
}

impl RealignOptions {
    /// Create new realign options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set classification options.
    pub fn with_classify(mut self, classify: ClassifyOptions) -> Self {
        self.classify = classify;
        self
    }

    /// Set the padding between content and the Diff column.
    pub fn with_column_padding(mut self, padding: usize) -> Self {
        self.column_padding = padding;
        self
    }

    /// Set the Diff column width.
    pub fn with_annotation_width(mut self, width: usize) -> Self {
        self.annotation_width = width;
        self
    }

    /// Set the minimum gap before an overflowing annotation.
    pub fn with_min_gap(mut self, gap: usize) -> Self {
        self.min_gap = gap.max(1);
        self
    }

    /// Set the trend threshold in percent.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.abs();
        self
    }
}

impl Default for RealignOptions {
    fn default() -> Self {
        Self {
            classify: ClassifyOptions::default(),
            column_padding: DEFAULT_COLUMN_PADDING,
            annotation_width: DEFAULT_ANNOTATION_WIDTH,
            min_gap: DEFAULT_MIN_GAP,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
