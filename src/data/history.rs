//! Historical benchmark data kept in a `window.BENCHMARK_DATA = {...};`
//! script consumed by the benchmark dashboard.

use super::{now_millis, to_json_indented};
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Default group key entries are appended under.
pub const DEFAULT_GROUP: &str = "Casbin";

/// Default tool recorded on each entry.
pub const DEFAULT_TOOL: &str = "casbin";

/// Repository URL of a freshly created history document.
pub const DEFAULT_REPO_URL: &str = "https://github.com/casbin/casbin";

const ASSIGNMENT_PREFIX: &str = "window.BENCHMARK_DATA = ";
const UNKNOWN: &str = "unknown";

/// Options for updating the history document.
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Group key under `entries`
    pub group: String,
    /// Tool name stored on new entries
    pub tool: String,
    /// `repoUrl` of a newly created document
    pub repo_url: String,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            repo_url: DEFAULT_REPO_URL.to_string(),
        }
    }
}

impl HistoryOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group key.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the tool name.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Set the repository URL used for new documents.
    pub fn with_repo_url(mut self, repo_url: impl Into<String>) -> Self {
        self.repo_url = repo_url.into();
        self
    }

    /// An empty history document.
    pub fn default_document(&self) -> Value {
        json!({
            "lastUpdate": 0,
            "repoUrl": self.repo_url,
            "entries": {},
        })
    }
}

/// Commit summary stored with a history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryCommit {
    /// Commit time as supplied, `null` when unknown
    pub time: Value,
    /// Remaining fields are copied as supplied, `"unknown"` when absent
    pub id: Value,
    pub author: Value,
    pub message: Value,
}

/// One benchmark value in a history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryBenchmark {
    pub name: String,
    pub unit: String,
    /// Mean time per operation, copied verbatim
    pub value: Value,
}

/// A single benchmark run in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub commit: HistoryCommit,
    /// Milliseconds since the Unix epoch
    pub date: i64,
    pub tool: String,
    pub benchmarks: Vec<HistoryBenchmark>,
}

/// Extract the history document from the content of a `data.js` script.
///
/// Content without a `window.BENCHMARK_DATA` assignment yields the default
/// document. An assignment whose JSON does not decode is an error.
pub fn parse_data_js(content: &str, options: &HistoryOptions) -> Result<Value> {
    let assignment = Regex::new(r"(?s)window\.BENCHMARK_DATA\s*=\s*(\{.*\})").unwrap();

    match assignment.captures(content) {
        Some(caps) => Ok(serde_json::from_str(&caps[1])?),
        None => {
            log::debug!("No BENCHMARK_DATA assignment found, starting a new document");
            Ok(options.default_document())
        }
    }
}

/// Build a history entry from a merged benchmark result document.
pub fn build_entry(bench: &Value, options: &HistoryOptions, now: i64) -> Result<HistoryEntry> {
    let commit_info = bench.get("commit_info");
    let field = |key: &str| {
        commit_info
            .and_then(|info| info.get(key))
            .cloned()
            .unwrap_or_else(|| Value::from(UNKNOWN))
    };

    let commit = HistoryCommit {
        time: commit_info
            .and_then(|info| info.get("time"))
            .cloned()
            .unwrap_or(Value::Null),
        id: field("id"),
        author: field("author_name"),
        message: field("message"),
    };

    let items = match bench.get("benchmarks") {
        None => &[][..],
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => {
            return Err(Error::InvalidData(
                "`benchmarks` is not an array".to_string(),
            ))
        }
    };

    let benchmarks = items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<HistoryBenchmark> {
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::MissingField(format!("benchmarks[{}].name", index)))?;
            let value = item
                .pointer("/stats/mean")
                .cloned()
                .ok_or_else(|| Error::MissingField(format!("benchmarks[{}].stats.mean", index)))?;
            Ok(HistoryBenchmark {
                name: name.to_string(),
                unit: "ns/op".to_string(),
                value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HistoryEntry {
        commit,
        date: now,
        tool: options.tool.clone(),
        benchmarks,
    })
}

/// Append `entry` under `group` and stamp `lastUpdate` with `now`.
pub fn append_entry(data: &mut Value, group: &str, entry: HistoryEntry, now: i64) -> Result<()> {
    let object = data
        .as_object_mut()
        .ok_or_else(|| Error::InvalidData("history document is not an object".to_string()))?;

    {
        let entries = object
            .entry("entries")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| Error::InvalidData("`entries` is not an object".to_string()))?;

        let runs = entries
            .entry(group)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| Error::InvalidData(format!("`entries.{}` is not an array", group)))?;

        runs.push(serde_json::to_value(entry)?);
    }

    object.insert("lastUpdate".to_string(), json!(now));
    Ok(())
}

/// Render the history document as a `data.js` script.
pub fn render_data_js(data: &Value) -> Result<String> {
    Ok(format!("{}{};", ASSIGNMENT_PREFIX, to_json_indented(data, 4)?))
}

/// Append the run in `bench_path` to the history script at `data_js_path`.
///
/// A missing script is created. Returns the number of benchmarks appended.
pub fn update_history<P, Q>(bench_path: P, data_js_path: Q, options: &HistoryOptions) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let data_js_path = data_js_path.as_ref();
    let bench: Value = serde_json::from_str(&fs::read_to_string(bench_path.as_ref())?)?;

    let mut data = if data_js_path.exists() {
        parse_data_js(&fs::read_to_string(data_js_path)?, options)?
    } else {
        options.default_document()
    };

    let now = now_millis();
    let entry = build_entry(&bench, options, now)?;
    let count = entry.benchmarks.len();

    append_entry(&mut data, &options.group, entry, now)?;
    fs::write(data_js_path, render_data_js(&data)?)?;

    log::info!(
        "Appended {} benchmarks to {} under {}",
        count,
        data_js_path.display(),
        options.group
    );
    Ok(count)
}
