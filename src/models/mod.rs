pub mod norms;

pub use norms::{Metric, NormStatus, NormTable, ThresholdKind, Thresholds};
