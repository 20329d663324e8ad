//! Numeric extraction from benchmark data rows.
//!
//! A row such as `Enforce-8   150ns ± 2%   120ns ± 3%   -20.00% (p=0.002 n=6)`
//! yields the baseline `150ns`, the new value `120ns` and an existing
//! percentage `-20.00%`. Spread columns (`± 2%`), p-values and sample counts
//! are statistics and never count as measurements.

use crate::model::{MeasurementPair, NumericToken};
use regex::Regex;

/// Tokens that only draw table structure.
const STRUCTURAL_TOKENS: &[&str] = &["±", "∞", "~", "│"];

/// An existing `+12.34%` style token within a row.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentMatch {
    /// Byte offset of the first character of the match
    pub start: usize,
    /// Byte offset just past the `%`
    pub end: usize,
    /// Numeric text without the `%`
    pub number: String,
}

impl PercentMatch {
    /// Parse the numeric part.
    pub fn value(&self) -> Option<f64> {
        self.number.parse().ok()
    }
}

/// Extracts names, measurements and percentages from data rows.
pub struct Extractor {
    worker_suffix_regex: Regex,
    superscript_regex: Regex,
    number_regex: Regex,
    percent_regex: Regex,
}

impl Extractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            worker_suffix_regex: Regex::new(r"^(\s*\S+?)-\d+(\s|$)").unwrap(),
            superscript_regex: Regex::new(r"[¹²³⁴⁵⁶⁷⁸⁹⁰]").unwrap(),
            number_regex: Regex::new(r"^([-+]?\d*\.?\d+)([a-zA-Zµμ]+)?$").unwrap(),
            percent_regex: Regex::new(r"([+-]?\d+\.\d+)%").unwrap(),
        }
    }

    /// Remove a trailing `-N` worker count from the leading name token.
    ///
    /// `Foo/size-100-8  1n` becomes `Foo/size-100  1n`. Indentation and the
    /// rest of the row are kept as is.
    pub fn strip_worker_suffix(&self, line: &str) -> String {
        self.worker_suffix_regex
            .replacen(line, 1, "${1}${2}")
            .into_owned()
    }

    /// Parse one cell token into a number with an optional unit.
    ///
    /// Returns `None` for statistics (`%`, `=`) and non-numeric text.
    pub fn parse_token(&self, token: &str) -> Option<NumericToken> {
        if token.contains('%') || token.contains('=') {
            return None;
        }
        let cleaned = self.superscript_regex.replace_all(token, "");
        let cleaned = cleaned.split('±').next().unwrap_or_default().trim();
        let cleaned = cleaned.split('(').next().unwrap_or_default().trim();
        if cleaned.is_empty() {
            return None;
        }

        let caps = self.number_regex.captures(cleaned)?;
        let magnitude: f64 = caps.get(1)?.as_str().parse().ok()?;
        Some(match caps.get(2) {
            Some(suffix) => NumericToken::with_suffix(magnitude, suffix.as_str()),
            None => NumericToken::bare(magnitude),
        })
    }

    /// Collect up to two measurements from a worker-stripped row.
    ///
    /// The first whitespace-delimited token is the benchmark name and is
    /// skipped.
    pub fn extract_numbers(&self, line: &str) -> Vec<NumericToken> {
        let mut found = Vec::with_capacity(2);
        for token in line.split_whitespace().skip(1) {
            if STRUCTURAL_TOKENS.contains(&token) {
                continue;
            }
            if let Some(number) = self.parse_token(token) {
                found.push(number);
                if found.len() == 2 {
                    break;
                }
            }
        }
        found
    }

    /// Baseline and new measurement, when a row has both.
    pub fn extract_pair(&self, line: &str) -> Option<MeasurementPair> {
        let mut numbers = self.extract_numbers(line).into_iter();
        match (numbers.next(), numbers.next()) {
            (Some(baseline), Some(new)) => Some(MeasurementPair::new(baseline, new)),
            _ => None,
        }
    }

    /// Find the row's existing delta percentage.
    ///
    /// Percentages directly following `±` belong to the spread column and
    /// are skipped.
    pub fn find_percentage(&self, line: &str) -> Option<PercentMatch> {
        self.percent_regex.captures_iter(line).find_map(|caps| {
            let whole = caps.get(0)?;
            let preceding = line[..whole.start()].trim_end().chars().next_back();
            if preceding == Some('±') {
                return None;
            }
            Some(PercentMatch {
                start: whole.start(),
                end: whole.end(),
                number: caps.get(1)?.as_str().to_string(),
            })
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
