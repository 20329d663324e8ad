//! Conversion of raw `go test -bench` output into dashboard JSON.

use super::{now_millis, to_json_indented, CommitInfo};
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name parts rendered fully upper-case.
const ACRONYMS: &[&str] = &["rbac", "abac", "acl", "api", "rest"];

/// One benchmark result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchEntry {
    /// Normalized benchmark name
    pub name: String,
    /// Time per operation in nanoseconds, rounded to two decimals
    pub value: f64,
    /// Always `ns/op`
    pub unit: String,
    /// Iteration count, e.g. `48314947 times`
    pub extra: String,
}

/// A formatted benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Commit that produced the run
    pub commit: CommitInfo,
    /// Milliseconds since the Unix epoch
    pub date: i64,
    /// Producing tool
    pub tool: String,
    /// Available CPUs on the runner
    pub procs: usize,
    /// Benchmark results in input order
    pub benches: Vec<BenchEntry>,
}

/// Normalize a Go benchmark name for display.
///
/// The `Benchmark` prefix and the `-N` GOMAXPROCS suffix are removed, the
/// rest is split on `/` and `_`, known acronyms are upper-cased and every
/// other part is capitalized before joining.
///
/// ```
/// use benchdiff::data::normalize_name;
///
/// assert_eq!(normalize_name("BenchmarkCachedRaw-8"), "Cachedraw");
/// assert_eq!(normalize_name("Benchmark_rbac_api/small"), "RBACAPISmall");
/// ```
pub fn normalize_name(name: &str) -> String {
    let name = name.strip_prefix("Benchmark").unwrap_or(name);
    let name = strip_procs_suffix(name);

    name.split(['/', '_'])
        .map(|part| {
            if ACRONYMS.contains(&part.to_lowercase().as_str()) {
                part.to_uppercase()
            } else {
                capitalize(part)
            }
        })
        .collect()
}

fn strip_procs_suffix(name: &str) -> &str {
    match name.rfind('-') {
        Some(pos)
            if pos + 1 < name.len() && name[pos + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &name[..pos]
        }
        _ => name,
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parse benchmark result lines (`BenchmarkName-8  10000  123 ns/op ...`).
///
/// Lines that are not `ns/op` results are ignored.
pub fn parse_bench_output(text: &str) -> Vec<BenchEntry> {
    let line_regex = Regex::new(r"^(Benchmark\S+)\s+(\d+)\s+([\d.]+)\s+ns/op").unwrap();

    text.lines()
        .filter_map(|line| {
            let caps = line_regex.captures(line)?;
            let iterations: u64 = caps[2].parse().ok()?;
            let value: f64 = caps[3].parse().ok()?;
            Some(BenchEntry {
                name: normalize_name(&caps[1]),
                value: (value * 100.0).round() / 100.0,
                unit: "ns/op".to_string(),
                extra: format!("{} times", iterations),
            })
        })
        .collect()
}

/// Build a report from raw benchmark output.
pub fn format_report(text: &str, commit: CommitInfo) -> BenchReport {
    let procs = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    BenchReport {
        commit,
        date: now_millis(),
        tool: "go".to_string(),
        procs,
        benches: parse_bench_output(text),
    }
}

/// Format a benchmark output file into a JSON report file.
pub fn format_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    commit: CommitInfo,
) -> Result<BenchReport> {
    let text = fs::read_to_string(input.as_ref())?;
    let report = format_report(&text, commit);
    log::debug!(
        "Parsed {} benchmarks from {}",
        report.benches.len(),
        input.as_ref().display()
    );
    fs::write(output, to_json_indented(&report, 2)?)?;
    Ok(report)
}
