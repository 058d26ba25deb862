//! Stable application-wide constants.
//!
//! Values here are fixed for the lifetime of the process. The only value with
//! an environment override is the inference API key; see
//! [`ApiKey`](crate::config::ApiKey).

// --- Inference API ---

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
/// Placeholder used when `GROQ_API_KEY` is absent or empty.
/// Not a usable credential; requests made with it will be rejected upstream.
pub const FALLBACK_GROQ_API_KEY: &str = "groq-api-key-not-configured";
/// Model used for metrics analysis.
pub const GROQ_MODEL: &str = "llama-3.1-70b-versatile";

// --- Server binding ---

/// Bind address for the analysis server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port for the analysis server.
pub const DEFAULT_PORT: u16 = 8000;

// --- Health norms (WHO / CDC reference values) ---

/// Daily step count considered optimal.
pub const STEPS_OPTIMAL: f64 = 10_000.0;
/// Daily step count below which activity is insufficient.
pub const STEPS_MINIMUM: f64 = 5_000.0;

/// Resting heart rate lower bound (bpm).
pub const HEART_RATE_MIN: f64 = 60.0;
/// Resting heart rate upper bound (bpm).
pub const HEART_RATE_MAX: f64 = 100.0;

/// Hours of sleep per night considered optimal.
pub const SLEEP_OPTIMAL_HOURS: f64 = 8.0;
/// Minimum recommended hours of sleep per night.
pub const SLEEP_MINIMUM_HOURS: f64 = 7.0;

/// Daily water intake considered optimal (litres).
pub const HYDRATION_OPTIMAL_LITRES: f64 = 2.5;
/// Minimum daily water intake (litres).
pub const HYDRATION_MINIMUM_LITRES: f64 = 1.5;
