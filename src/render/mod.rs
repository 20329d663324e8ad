//! Rendering module for realigning benchmark comparison tables.

mod layout;
mod options;
mod realign;
mod result;
mod row;
mod trend;

pub use layout::{pad_to, Alignment};
pub use options::{
    RealignOptions, DEFAULT_ANNOTATION_WIDTH, DEFAULT_COLUMN_PADDING, DEFAULT_MIN_GAP,
    DEFAULT_THRESHOLD,
};
pub use realign::{realign, realign_text, Realigner, DIFF_LABEL, LABEL_ANCHOR};
pub use result::{RealignResult, RealignStats};
pub use row::{RowOutcome, RowPlan, RowPlanner, GEOMEAN};
pub use trend::{percent_change, round2, Annotation, Trend};
