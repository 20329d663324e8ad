//! Line classification result.

/// What a single report line is, relative to the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Any line outside a fenced block
    Outside,
    /// The fence delimiter itself
    Fence,
    /// A table header row (column titles)
    Header,
    /// Footnote or sample-count diagnostic
    FootnoteOrMeta,
    /// Blank line or environment metadata (`goos:`, `cpu:` ...)
    BlankOrEnvMeta,
    /// A benchmark row carrying measurements
    Data,
}

impl LineKind {
    /// Whether the line is a benchmark row.
    pub fn is_data(self) -> bool {
        matches!(self, LineKind::Data)
    }

    /// Whether the line is emitted exactly as read.
    pub fn is_verbatim(self) -> bool {
        matches!(
            self,
            LineKind::Outside | LineKind::Fence | LineKind::FootnoteOrMeta | LineKind::BlankOrEnvMeta
        )
    }
}
