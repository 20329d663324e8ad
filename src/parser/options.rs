//! Classification options and configuration.

/// Default fence delimiter.
pub const DEFAULT_FENCE: &str = "```";

/// Default table column separator drawn by benchstat.
pub const DEFAULT_SEPARATOR: char = '│';

/// Options controlling how report lines are classified.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Trimmed line content that opens and closes a fenced block
    pub fence_marker: String,

    /// Column separator glyph required on header rows
    pub column_separator: char,

    /// Substrings that mark a separator line as a header row
    pub header_keywords: Vec<String>,

    /// Prefixes of environment metadata lines (`goos:`, `cpu:` ...)
    pub meta_prefixes: Vec<String>,
}

impl ClassifyOptions {
    /// Create new classify options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fence marker.
    pub fn with_fence_marker(mut self, marker: impl Into<String>) -> Self {
        self.fence_marker = marker.into();
        self
    }

    /// Set the column separator glyph.
    pub fn with_column_separator(mut self, separator: char) -> Self {
        self.column_separator = separator;
        self
    }

    /// Add an environment metadata prefix.
    pub fn with_meta_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.meta_prefixes.push(prefix.into());
        self
    }

    /// Replace the header keywords.
    pub fn with_header_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            fence_marker: DEFAULT_FENCE.to_string(),
            column_separator: DEFAULT_SEPARATOR,
            header_keywords: vec!["vs base".into(), "old".into(), "new".into()],
            meta_prefixes: vec!["goos:".into(), "goarch:".into(), "pkg:".into(), "cpu:".into()],
        }
    }
}
