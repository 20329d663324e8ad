//! Percent change, trend icons and Diff column annotations.

use std::fmt;

/// Direction of a benchmark change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Slower or bigger than the threshold allows
    Regression,
    /// Faster or smaller beyond the threshold
    Improvement,
    /// Within the threshold
    Steady,
}

impl Trend {
    /// Classify a percent change.
    ///
    /// The change is compared at the two decimals it is displayed with, so
    /// a row shown as `+10.00%` is always steady.
    pub fn from_percent(percent: f64, threshold: f64) -> Self {
        let shown = round2(percent);
        if shown > threshold {
            Trend::Regression
        } else if shown < -threshold {
            Trend::Improvement
        } else {
            Trend::Steady
        }
    }

    /// Icon glyph for the trend.
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Regression => "🐌",
            Trend::Improvement => "🚀",
            Trend::Steady => "➡️",
        }
    }

    /// All icon glyphs, used to drop stale icons from carried annotations.
    pub fn all_icons() -> [&'static str; 3] {
        [
            Trend::Regression.icon(),
            Trend::Improvement.icon(),
            Trend::Steady.icon(),
        ]
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percent change from `baseline` to `new`.
///
/// Two zeros are no change. A zero baseline with a non-zero new value has
/// no defined change and yields `None`.
pub fn percent_change(baseline: f64, new: f64) -> Option<f64> {
    if baseline == 0.0 {
        return if new == 0.0 { Some(0.0) } else { None };
    }
    Some((new - baseline) / baseline * 100.0)
}

/// Text placed in the Diff column.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// A percent change with its icon, e.g. `-20.00% 🚀`
    Change { percent: f64, trend: Trend },
    /// An existing percentage re-iconed, followed by the row's original tail
    Carried {
        percent: f64,
        trend: Trend,
        tail: String,
    },
    /// geomean over inputs containing zero
    GeomeanUndefined,
}

impl Annotation {
    /// Build a change annotation.
    pub fn change(percent: f64, threshold: f64) -> Self {
        Annotation::Change {
            percent,
            trend: Trend::from_percent(percent, threshold),
        }
    }

    /// Build a carried annotation.
    pub fn carried(percent: f64, threshold: f64, tail: impl Into<String>) -> Self {
        Annotation::Carried {
            percent,
            trend: Trend::from_percent(percent, threshold),
            tail: tail.into(),
        }
    }

    /// Trend of the annotation, if it has one.
    pub fn trend(&self) -> Option<Trend> {
        match self {
            Annotation::Change { trend, .. } | Annotation::Carried { trend, .. } => Some(*trend),
            Annotation::GeomeanUndefined => None,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Change { percent, trend } => {
                write!(f, "{:+.2}% {}", percent, trend.icon())
            }
            Annotation::Carried {
                percent,
                trend,
                tail,
            } => write!(f, "{:+.2}% {}{}", percent, trend.icon(), tail),
            Annotation::GeomeanUndefined => f.write_str("n/a (has zero)"),
        }
    }
}
