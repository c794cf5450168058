use crate::label::{normalize, LabelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four water-quality values recorded with every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Temperature,
    Ph,
    Ammonia,
    Nitrite,
}

impl ParameterKind {
    /// Display and export order.
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::Temperature,
        ParameterKind::Ph,
        ParameterKind::Ammonia,
        ParameterKind::Nitrite,
    ];

    /// Column name used in the CSV export and chart legends.
    pub fn column(&self) -> &'static str {
        match self {
            ParameterKind::Temperature => "temp",
            ParameterKind::Ph => "ph",
            ParameterKind::Ammonia => "nh3",
            ParameterKind::Nitrite => "no2",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ParameterKind::Temperature => "°C",
            ParameterKind::Ph => "",
            ParameterKind::Ammonia | ParameterKind::Nitrite => "ppm",
        }
    }

    /// Range accepted at the input boundary. Values outside it are clamped
    /// before they reach the store.
    pub fn valid_range(&self) -> Range {
        match self {
            ParameterKind::Temperature => Range::new(10.0, 25.0),
            ParameterKind::Ph => Range::new(5.0, 9.0),
            ParameterKind::Ammonia => Range::new(0.0, 2.0),
            ParameterKind::Nitrite => Range::new(0.0, 1.0),
        }
    }

    /// Healthy interval used when no care profile overrides it.
    pub fn default_ideal_range(&self) -> Range {
        match self {
            ParameterKind::Temperature => Range::new(16.0, 18.0),
            ParameterKind::Ph => Range::new(7.0, 7.6),
            ParameterKind::Ammonia => Range::new(0.0, 0.02),
            ParameterKind::Nitrite => Range::new(0.0, 0.2),
        }
    }

    /// Clamps a raw input value into the valid range. NaN falls back to the
    /// lower bound.
    pub fn clamp_to_valid(&self, value: f64) -> f64 {
        let range = self.valid_range();
        if value.is_nan() {
            return range.min;
        }
        value.clamp(range.min, range.max)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterKind::Temperature => "temperature",
            ParameterKind::Ph => "ph",
            ParameterKind::Ammonia => "ammonia",
            ParameterKind::Nitrite => "nitrite",
        };
        f.write_str(name)
    }
}

impl FromStr for ParameterKind {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "temperature" | "temp" => Ok(ParameterKind::Temperature),
            "ph" => Ok(ParameterKind::Ph),
            "ammonia" | "nh3" => Ok(ParameterKind::Ammonia),
            "nitrite" | "no2" => Ok(ParameterKind::Nitrite),
            _ => Err(LabelError::UnknownParameter(s.to_string())),
        }
    }
}

/// An inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
