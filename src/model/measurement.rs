//! Numeric tokens and unit normalization.

use std::fmt;

/// The kind of quantity a unit suffix measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFamily {
    /// n, ns, u, us, m, ms, s
    Time,
    /// Ki, Mi, Gi, Ti, B
    BinaryBytes,
    /// k, K, M, G
    DecimalScale,
    /// Markers such as `C` and unrecognized suffixes
    Count,
}

/// A recognized unit suffix with its base-unit multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Suffix as written, with micro signs folded to `u`
    pub suffix: String,
    /// Factor converting a magnitude into the base unit
    pub multiplier: f64,
    /// Quantity family
    pub family: UnitFamily,
}

impl Unit {
    /// Resolve a suffix. Unknown suffixes normalize with multiplier 1.
    pub fn from_suffix(suffix: &str) -> Self {
        let suffix = suffix.replace('µ', "u").replace('μ', "u");
        let (multiplier, family) = match suffix.as_str() {
            "n" | "ns" => (1e-9, UnitFamily::Time),
            "u" | "us" => (1e-6, UnitFamily::Time),
            "m" | "ms" => (1e-3, UnitFamily::Time),
            "s" => (1.0, UnitFamily::Time),
            "k" | "K" => (1e3, UnitFamily::DecimalScale),
            "M" => (1e6, UnitFamily::DecimalScale),
            "G" => (1e9, UnitFamily::DecimalScale),
            "Ki" => (1024.0, UnitFamily::BinaryBytes),
            "Mi" => (1024.0_f64.powi(2), UnitFamily::BinaryBytes),
            "Gi" => (1024.0_f64.powi(3), UnitFamily::BinaryBytes),
            "Ti" => (1024.0_f64.powi(4), UnitFamily::BinaryBytes),
            "B" => (1.0, UnitFamily::BinaryBytes),
            _ => (1.0, UnitFamily::Count),
        };
        Self {
            suffix,
            multiplier,
            family,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffix)
    }
}

/// A number read from a table cell, e.g. `150ns` or `1.5Ki`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericToken {
    /// Magnitude as written
    pub magnitude: f64,
    /// Unit suffix, if any
    pub unit: Option<Unit>,
}

impl NumericToken {
    /// Create a token without a unit.
    pub fn bare(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: None,
        }
    }

    /// Create a token with a unit suffix.
    pub fn with_suffix(magnitude: f64, suffix: &str) -> Self {
        Self {
            magnitude,
            unit: Some(Unit::from_suffix(suffix)),
        }
    }

    /// Value in the base unit (seconds, bytes or plain count).
    pub fn normalized(&self) -> f64 {
        match &self.unit {
            Some(unit) => self.magnitude * unit.multiplier,
            None => self.magnitude,
        }
    }

    /// Unit family, if the token carries a suffix.
    pub fn family(&self) -> Option<UnitFamily> {
        self.unit.as_ref().map(|u| u.family)
    }
}

/// Baseline and new measurement of one benchmark row.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementPair {
    /// Old value
    pub baseline: NumericToken,
    /// New value
    pub new: NumericToken,
}

impl MeasurementPair {
    /// Create a pair.
    pub fn new(baseline: NumericToken, new: NumericToken) -> Self {
        Self { baseline, new }
    }

    /// Normalized baseline value.
    pub fn baseline_value(&self) -> f64 {
        self.baseline.normalized()
    }

    /// Normalized new value.
    pub fn new_value(&self) -> f64 {
        self.new.normalized()
    }

    /// Whether either side normalizes to zero.
    pub fn has_zero(&self) -> bool {
        self.baseline_value() == 0.0 || self.new_value() == 0.0
    }

    /// Whether both sides normalize to zero.
    pub fn both_zero(&self) -> bool {
        self.baseline_value() == 0.0 && self.new_value() == 0.0
    }

    /// False only when both sides carry suffixes from different families.
    ///
    /// A bare number is compatible with anything.
    pub fn units_comparable(&self) -> bool {
        match (self.baseline.family(), self.new.family()) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}
