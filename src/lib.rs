// Library exports for the analysis server and its tooling

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{settings, ApiKey, ApiKeySource, Settings};
pub use error::{ConfigError, Result};
pub use models::{Metric, NormStatus, NormTable, ThresholdKind};
