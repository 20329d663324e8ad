//! Per-row rewrite plans.
//!
//! A plan splits a data row into the content kept on the left and the
//! annotation placed in the Diff column. The measuring pass and the
//! rewriting pass read the same plans, so the column they agree on is
//! derived from exactly the text that gets emitted.

use super::trend::{percent_change, Annotation, Trend};
use crate::parser::Extractor;
use regex::Regex;

/// Name of the geometric-mean summary row.
pub const GEOMEAN: &str = "geomean";

/// How a data row was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Change recomputed from two measurements
    Recomputed,
    /// Both measurements zero, reported as no change
    ZeroPair,
    /// geomean with a zero or missing input
    GeomeanUndefined,
    /// Existing percentage re-iconed
    Carried,
    /// Existing percentage could not be read; row kept as is
    Malformed,
    /// Nothing to annotate
    PassThrough,
}

/// Rewrite plan for one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPlan {
    /// Row content left of the Diff column
    pub left: String,
    /// Diff column text, absent for rows emitted unchanged
    pub annotation: Option<Annotation>,
    /// Which rule produced the plan
    pub outcome: RowOutcome,
}

impl RowPlan {
    fn annotated(left: String, annotation: Annotation, outcome: RowOutcome) -> Self {
        Self {
            left,
            annotation: Some(annotation),
            outcome,
        }
    }

    fn unchanged(line: String, outcome: RowOutcome) -> Self {
        Self {
            left: line,
            annotation: None,
            outcome,
        }
    }

    /// Width of the left content in characters, trailing spaces excluded.
    pub fn content_width(&self) -> usize {
        self.left.trim_end().chars().count()
    }
}

/// Builds [`RowPlan`]s for data rows.
pub struct RowPlanner {
    extractor: Extractor,
    threshold: f64,
    icon_regex: Regex,
}

impl RowPlanner {
    /// Create a planner with the given trend threshold.
    pub fn new(threshold: f64) -> Self {
        let icons = Trend::all_icons()
            .iter()
            .map(|icon| regex::escape(icon.trim_end_matches('\u{FE0F}')) + "\u{FE0F}?")
            .collect::<Vec<_>>()
            .join("|");
        Self {
            extractor: Extractor::new(),
            threshold,
            icon_regex: Regex::new(&format!(r"\s*(?:{})", icons)).unwrap(),
        }
    }

    /// Plan a single data row.
    pub fn plan(&self, line: &str) -> RowPlan {
        let line = self.extractor.strip_worker_suffix(line);
        if line.trim().is_empty() {
            return RowPlan::unchanged(line, RowOutcome::PassThrough);
        }
        let name = line.split_whitespace().next().unwrap_or_default();

        let numbers = self.extractor.extract_numbers(&line);
        let percent = self.extractor.find_percentage(&line);
        let left_of_percent = match &percent {
            Some(pct) => line[..pct.start].trim_end().to_string(),
            None => line.trim_end().to_string(),
        };

        if name == GEOMEAN
            && percent.is_none()
            && (numbers.len() < 2 || numbers.iter().any(|n| n.normalized() == 0.0))
        {
            let indent_len = line.len() - line.trim_start().len();
            let left = format!("{}{}", &line[..indent_len], GEOMEAN);
            return RowPlan::annotated(
                left,
                Annotation::GeomeanUndefined,
                RowOutcome::GeomeanUndefined,
            );
        }

        if let Some(pair) = self.extractor.extract_pair(&line) {
            if !pair.units_comparable() {
                log::warn!(
                    "Row '{}' compares values of different units; the change may be meaningless",
                    name
                );
            }
            if let Some(change) = percent_change(pair.baseline_value(), pair.new_value()) {
                let outcome = if pair.both_zero() {
                    RowOutcome::ZeroPair
                } else {
                    RowOutcome::Recomputed
                };
                let annotation = Annotation::change(change, self.threshold);
                return RowPlan::annotated(left_of_percent, annotation, outcome);
            }
        }

        if let Some(pct) = percent {
            return match pct.value() {
                Some(value) => {
                    let tail = self.icon_regex.replace_all(&line[pct.end..], "");
                    let annotation = Annotation::carried(value, self.threshold, tail);
                    RowPlan::annotated(left_of_percent, annotation, RowOutcome::Carried)
                }
                None => {
                    log::warn!("Unreadable percentage '{}' in row '{}'", pct.number, name);
                    RowPlan::unchanged(line, RowOutcome::Malformed)
                }
            };
        }

        RowPlan::unchanged(line, RowOutcome::PassThrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner() -> RowPlanner {
        RowPlanner::new(10.0)
    }

    #[test]
    fn test_recomputed_row() {
        let plan = planner().plan("Enforce-8   150ns ± 2%   120ns ± 3%");
        assert_eq!(plan.outcome, RowOutcome::Recomputed);
        assert_eq!(plan.left, "Enforce   150ns ± 2%   120ns ± 3%");
        assert_eq!(plan.annotation.unwrap().to_string(), "-20.00% 🚀");
    }

    #[test]
    fn test_recomputed_row_drops_existing_delta() {
        let plan = planner().plan("Foo-4   100n ± 1%   150n ± 2%   +49.00% (p=0.000 n=10)");
        assert_eq!(plan.outcome, RowOutcome::Recomputed);
        assert_eq!(plan.left, "Foo   100n ± 1%   150n ± 2%");
        assert_eq!(plan.annotation.unwrap().to_string(), "+50.00% 🐌");
    }

    #[test]
    fn test_zero_pair() {
        let plan = planner().plan("Raw-4   0.000 ± 0%   0.000 ± 0%   ~ (p=1.000 n=10) ¹");
        assert_eq!(plan.outcome, RowOutcome::ZeroPair);
        assert_eq!(plan.left, "Raw   0.000 ± 0%   0.000 ± 0%   ~ (p=1.000 n=10) ¹");
        assert_eq!(plan.annotation.unwrap().to_string(), "+0.00% ➡️");
    }

    #[test]
    fn test_geomean_with_zero() {
        let plan = planner().plan("geomean   0.00ns   5.00ns");
        assert_eq!(plan.outcome, RowOutcome::GeomeanUndefined);
        assert_eq!(plan.left, "geomean");
        assert_eq!(plan.annotation.unwrap().to_string(), "n/a (has zero)");
    }

    #[test]
    fn test_geomean_missing_values_keeps_indent() {
        let plan = planner().plan("  geomean   1.5n");
        assert_eq!(plan.outcome, RowOutcome::GeomeanUndefined);
        assert_eq!(plan.left, "  geomean");
    }

    #[test]
    fn test_geomean_with_values_is_recomputed() {
        let plan = planner().plan("geomean   1.000µ   1.100µ");
        assert_eq!(plan.outcome, RowOutcome::Recomputed);
        assert_eq!(plan.annotation.unwrap().to_string(), "+10.00% ➡️");
    }

    #[test]
    fn test_zero_baseline_falls_back_to_percentage() {
        let plan = planner().plan("Foo   0   5   +12.50% (p=0.002 n=6) 🚀");
        assert_eq!(plan.outcome, RowOutcome::Carried);
        assert_eq!(plan.left, "Foo   0   5");
        assert_eq!(
            plan.annotation.unwrap().to_string(),
            "+12.50% 🐌 (p=0.002 n=6)"
        );
    }

    #[test]
    fn test_carried_strips_stale_icons() {
        let plan = planner().plan("geomean   -3.25% ➡️ 🐌");
        assert_eq!(plan.outcome, RowOutcome::Carried);
        assert_eq!(plan.left, "geomean");
        assert_eq!(plan.annotation.unwrap().to_string(), "-3.25% ➡️");
    }

    #[test]
    fn test_zero_baseline_without_percentage_passes_through() {
        let plan = planner().plan("Foo-2   0   5   ");
        assert_eq!(plan.outcome, RowOutcome::PassThrough);
        assert_eq!(plan.left, "Foo   0   5   ");
        assert!(plan.annotation.is_none());
        assert_eq!(plan.content_width(), "Foo   0   5".len());
    }

    #[test]
    fn test_text_row_passes_through() {
        let plan = planner().plan("some free text");
        assert_eq!(plan.outcome, RowOutcome::PassThrough);
        assert_eq!(plan.left, "some free text");
    }
}
