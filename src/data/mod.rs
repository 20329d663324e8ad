//! Benchmark data pipeline: formatting raw results, merging result files
//! and appending runs to the historical `data.js` document.

mod commit;
mod format;
mod history;
mod merge;

pub use commit::{CommitInfo, GitUser};
pub use format::{
    format_file, format_report, normalize_name, parse_bench_output, BenchEntry, BenchReport,
};
pub use history::{
    append_entry, build_entry, parse_data_js, render_data_js, update_history, HistoryBenchmark,
    HistoryCommit, HistoryEntry, HistoryOptions, DEFAULT_GROUP, DEFAULT_REPO_URL, DEFAULT_TOOL,
};
pub use merge::{expand_inputs, merge_documents, merge_files};

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serialize `value` as pretty JSON indented with `indent` spaces.
pub fn to_json_indented<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::Other(format!("JSON output is not UTF-8: {}", e)))
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_indented() {
        let value = json!({"a": [1, 2], "b": {}});
        let two = to_json_indented(&value, 2).unwrap();
        assert_eq!(two, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}");

        let four = to_json_indented(&value, 4).unwrap();
        assert!(four.starts_with("{\n    \"a\": [\n        1,"));
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(now_millis() > 1_577_836_800_000);
    }
}
