use crate::models::Metric;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("GROQ_API_KEY must be set")]
    MissingApiKey,

    #[error("Unknown metric: {0}. Use 'steps', 'heart_rate', 'sleep' or 'hydration'")]
    UnknownMetric(String),

    #[error("Unknown threshold: {0}. Use 'optimal', 'minimum', 'min' or 'max'")]
    UnknownThreshold(String),

    #[error("Invalid measurement for {metric}: {value} is not a finite number")]
    InvalidMeasurement { metric: Metric, value: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
