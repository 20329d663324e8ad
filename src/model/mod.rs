//! Model types for benchmark comparison reports.
//!
//! A report is held as plain lines. Line kinds and numeric tokens are
//! derived from those lines on every run and never stored back.

mod document;
mod line;
mod measurement;

pub use document::Document;
pub use line::LineKind;
pub use measurement::{MeasurementPair, NumericToken, Unit, UnitFamily};
