use crate::constants::*;
use crate::error::{ConfigError, Result};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Health metric tracked by the analysis server.
///
/// Ordering follows declaration order, which is also the order the norm table
/// is iterated and serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Steps,
    HeartRate,
    Sleep,
    Hydration,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Steps,
        Metric::HeartRate,
        Metric::Sleep,
        Metric::Hydration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::HeartRate => "heart_rate",
            Metric::Sleep => "sleep",
            Metric::Hydration => "hydration",
        }
    }

    /// Unit the thresholds of this metric are expressed in
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Steps => "steps/day",
            Metric::HeartRate => "bpm",
            Metric::Sleep => "hours",
            Metric::Hydration => "litres/day",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "steps" => Ok(Metric::Steps),
            "heart_rate" => Ok(Metric::HeartRate),
            "sleep" => Ok(Metric::Sleep),
            "hydration" => Ok(Metric::Hydration),
            _ => Err(ConfigError::UnknownMetric(s.to_string())),
        }
    }
}

/// Kind of reference value attached to a metric.
///
/// Floor-style metrics use `Optimal`/`Minimum`, range-style metrics use
/// `Min`/`Max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    Optimal,
    Minimum,
    Min,
    Max,
}

impl ThresholdKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ThresholdKind::Optimal => "optimal",
            ThresholdKind::Minimum => "minimum",
            ThresholdKind::Min => "min",
            ThresholdKind::Max => "max",
        }
    }
}

impl fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThresholdKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "optimal" => Ok(ThresholdKind::Optimal),
            "minimum" => Ok(ThresholdKind::Minimum),
            "min" => Ok(ThresholdKind::Min),
            "max" => Ok(ThresholdKind::Max),
            _ => Err(ConfigError::UnknownThreshold(s.to_string())),
        }
    }
}

/// Threshold values for a single metric
pub type Thresholds = BTreeMap<ThresholdKind, f64>;

/// Where a measurement falls relative to its metric's norms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormStatus {
    BelowMinimum,
    BelowOptimal,
    Optimal,
    BelowRange,
    InRange,
    AboveRange,
}

impl NormStatus {
    /// Whether the measurement meets the recommendation for its metric
    pub fn is_healthy(self) -> bool {
        matches!(self, NormStatus::Optimal | NormStatus::InRange)
    }
}

/// Read-only table of physiological reference values.
///
/// Serializes as `{"steps": {"optimal": 10000, ...}, ...}`; whole-number
/// thresholds are written as JSON integers.
#[derive(Debug, Clone, PartialEq)]
pub struct NormTable {
    norms: BTreeMap<Metric, Thresholds>,
}

impl NormTable {
    /// Reference norms based on WHO / CDC recommendations
    pub fn standard() -> Self {
        let norms = BTreeMap::from([
            (
                Metric::Steps,
                Thresholds::from([
                    (ThresholdKind::Optimal, STEPS_OPTIMAL),
                    (ThresholdKind::Minimum, STEPS_MINIMUM),
                ]),
            ),
            (
                Metric::HeartRate,
                Thresholds::from([
                    (ThresholdKind::Min, HEART_RATE_MIN),
                    (ThresholdKind::Max, HEART_RATE_MAX),
                ]),
            ),
            (
                Metric::Sleep,
                Thresholds::from([
                    (ThresholdKind::Optimal, SLEEP_OPTIMAL_HOURS),
                    (ThresholdKind::Minimum, SLEEP_MINIMUM_HOURS),
                ]),
            ),
            (
                Metric::Hydration,
                Thresholds::from([
                    (ThresholdKind::Optimal, HYDRATION_OPTIMAL_LITRES),
                    (ThresholdKind::Minimum, HYDRATION_MINIMUM_LITRES),
                ]),
            ),
        ]);

        NormTable { norms }
    }

    pub fn get(&self, metric: Metric) -> Option<&Thresholds> {
        self.norms.get(&metric)
    }

    pub fn threshold(&self, metric: Metric, kind: ThresholdKind) -> Option<f64> {
        self.norms.get(&metric)?.get(&kind).copied()
    }

    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.norms.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &Thresholds)> {
        self.norms.iter().map(|(metric, thresholds)| (*metric, thresholds))
    }

    pub fn len(&self) -> usize {
        self.norms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.norms.is_empty()
    }

    /// Compare a measurement against the norms of its metric.
    ///
    /// Thresholds are inclusive: a value equal to `minimum` is not below it,
    /// and a heart rate of exactly `max` is still in range.
    pub fn classify(&self, metric: Metric, value: f64) -> Result<NormStatus> {
        if !value.is_finite() {
            return Err(ConfigError::InvalidMeasurement { metric, value });
        }

        let min = self.threshold(metric, ThresholdKind::Min);
        let max = self.threshold(metric, ThresholdKind::Max);
        if min.is_some() || max.is_some() {
            return Ok(match (min, max) {
                (Some(min), _) if value < min => NormStatus::BelowRange,
                (_, Some(max)) if value > max => NormStatus::AboveRange,
                _ => NormStatus::InRange,
            });
        }

        let minimum = self.threshold(metric, ThresholdKind::Minimum);
        let optimal = self.threshold(metric, ThresholdKind::Optimal);
        Ok(match (minimum, optimal) {
            (Some(minimum), _) if value < minimum => NormStatus::BelowMinimum,
            (_, Some(optimal)) if value < optimal => NormStatus::BelowOptimal,
            _ => NormStatus::Optimal,
        })
    }
}

impl Serialize for NormTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.norms
                .iter()
                .map(|(metric, thresholds)| (metric, ThresholdsJson(thresholds))),
        )
    }
}

struct ThresholdsJson<'a>(&'a Thresholds);

impl Serialize for ThresholdsJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(kind, value)| (kind, ThresholdValue(*value))))
    }
}

struct ThresholdValue(f64);

impl Serialize for ThresholdValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
            serializer.serialize_u64(value as u64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl Default for NormTable {
    fn default() -> Self {
        Self::standard()
    }
}
