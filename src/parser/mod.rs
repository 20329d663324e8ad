//! Report parsing module: line classification and numeric extraction.

mod classifier;
mod extractor;
mod options;

pub use classifier::Classifier;
pub use extractor::{Extractor, PercentMatch};
pub use options::{ClassifyOptions, DEFAULT_FENCE, DEFAULT_SEPARATOR};
