use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Products the forecast backend has history for.
pub const PRODUCTS: [&str; 6] = ["Paseo", "Carretera", "Montana", "Amarilla", "VTT", "Velo"];
/// Metrics that can be forecast.
pub const METRICS: [&str; 3] = ["Profit", "Sales", "Units Sold"];
/// Horizons offered in the forecast builder.
pub const DURATIONS: [&str; 3] = ["3 months", "6 months", "1 year"];

pub const DEFAULT_PRODUCT: &str = "Paseo";
pub const DEFAULT_METRIC: &str = "Profit";
pub const DEFAULT_DURATION: &str = "6 months";

/// One predicted value. Older backends name the period `month`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(alias = "month")]
    pub period: String,
    pub predicted_value: f64,
}

impl ForecastPoint {
    pub fn new(period: impl Into<String>, predicted_value: f64) -> Self {
        Self {
            period: period.into(),
            predicted_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizonUnit {
    Month,
    Quarter,
    Year,
}

impl HorizonUnit {
    fn months(&self) -> u32 {
        match self {
            HorizonUnit::Month => 1,
            HorizonUnit::Quarter => 3,
            HorizonUnit::Year => 12,
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            HorizonUnit::Month => "month",
            HorizonUnit::Quarter => "quarter",
            HorizonUnit::Year => "year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHorizonError {
    #[error("duration \"{0}\" must start with a whole number, e.g. \"6 months\"")]
    InvalidCount(String),

    #[error("duration must be at least one period")]
    Zero,

    #[error("duration \"{0}\" must be given in months, quarters or years")]
    UnknownUnit(String),
}

/// How far ahead to forecast, in the `"<n> months|quarters|years"` form the
/// forecast backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForecastHorizon {
    pub count: u32,
    pub unit: HorizonUnit,
}

impl ForecastHorizon {
    pub fn new(count: u32, unit: HorizonUnit) -> Result<Self, ParseHorizonError> {
        if count == 0 {
            return Err(ParseHorizonError::Zero);
        }
        Ok(Self { count, unit })
    }

    /// Number of monthly periods the backend will predict. Saturates at
    /// `u32::MAX`.
    pub fn months(&self) -> u32 {
        self.count.saturating_mul(self.unit.months())
    }
}

impl Default for ForecastHorizon {
    fn default() -> Self {
        Self {
            count: 6,
            unit: HorizonUnit::Month,
        }
    }
}

impl FromStr for ForecastHorizon {
    type Err = ParseHorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let unit = if normalized.contains("month") {
            HorizonUnit::Month
        } else if normalized.contains("quarter") {
            HorizonUnit::Quarter
        } else if normalized.contains("year") {
            HorizonUnit::Year
        } else {
            return Err(ParseHorizonError::UnknownUnit(s.to_string()));
        };

        let count = normalized
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<u32>().ok())
            .ok_or_else(|| ParseHorizonError::InvalidCount(s.to_string()))?;

        ForecastHorizon::new(count, unit)
    }
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{} {}{}", self.count, self.unit.noun(), plural)
    }
}
