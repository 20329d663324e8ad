//! Diff column geometry.

use super::row::RowPlan;
use super::RealignOptions;

/// Where the Diff column starts and where the header closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    /// Character column at which every annotation begins
    pub diff_column_start: usize,
    /// Character column of the header's closing separator
    pub right_boundary: usize,
}

impl Alignment {
    /// Derive the geometry from the widest data row content.
    pub fn from_content_width(max_content_width: usize, options: &RealignOptions) -> Self {
        let diff_column_start = max_content_width + options.column_padding;
        Self {
            diff_column_start,
            right_boundary: diff_column_start + options.annotation_width,
        }
    }

    /// Measure a document's data rows.
    ///
    /// Only the left content of each plan counts; headers, footnotes and
    /// blank lines never reach this function.
    pub fn measure<'a, I>(plans: I, options: &RealignOptions) -> Self
    where
        I: IntoIterator<Item = &'a RowPlan>,
    {
        let max_content_width = plans
            .into_iter()
            .map(RowPlan::content_width)
            .max()
            .unwrap_or(0);
        let alignment = Self::from_content_width(max_content_width, options);
        log::debug!(
            "Widest row content {} chars, Diff column at {}, boundary at {}",
            max_content_width,
            alignment.diff_column_start,
            alignment.right_boundary
        );
        alignment
    }
}

/// Right-pad `text` with spaces up to `column`.
///
/// Text already at or past the column gets `min_gap` spaces instead; it is
/// never truncated.
pub fn pad_to(text: &str, column: usize, min_gap: usize) -> String {
    let width = text.chars().count();
    let fill = if width < column {
        column - width
    } else {
        min_gap
    };
    let mut padded = String::with_capacity(text.len() + fill);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(fill));
    padded
}
