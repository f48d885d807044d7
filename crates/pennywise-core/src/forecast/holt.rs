//! Holt's linear method (double exponential smoothing)
//!
//! Tracks a level and a trend component over an oldest-first series and
//! projects one step ahead. The smoothing constants are fixed.

use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::totals::Metric;

/// Level smoothing factor
pub const ALPHA: f64 = 0.5;
/// Trend smoothing factor
pub const BETA: f64 = 0.3;

/// Trends smaller than this (in currency units per step) count as flat
const FLAT_TREND: f64 = 0.005;

/// One-step-ahead forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Point forecast for the next period
    pub value: f64,
    /// Estimated change per period
    pub trend: f64,
}

impl ForecastResult {
    pub fn direction(&self) -> TrendDirection {
        if self.trend.abs() < FLAT_TREND {
            TrendDirection::Flat
        } else if self.trend > 0.0 {
            TrendDirection::Rising
        } else {
            TrendDirection::Falling
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Flat,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Flat => "flat",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Forecast the next value of an oldest-first series.
///
/// Returns `None` with fewer than two observations.
pub fn holt_forecast(series: &[f64]) -> Option<ForecastResult> {
    match series {
        [] | [_] => None,
        [first, last] => {
            let trend = last - first;
            Some(ForecastResult {
                value: last + trend,
                trend,
            })
        }
        [first, second, ..] => {
            let mut level = *first;
            let mut trend = second - first;

            for &y in &series[1..] {
                let prev_level = level;
                level = ALPHA * y + (1.0 - ALPHA) * (prev_level + trend);
                trend = BETA * (level - prev_level) + (1.0 - BETA) * trend;
            }

            Some(ForecastResult {
                value: level + trend,
                trend,
            })
        }
    }
}

/// Forecast an aggregate series read off each period's totals
pub fn forecast_metric(history: &History, metric: Metric) -> Option<ForecastResult> {
    let result = holt_forecast(&history.series(metric));
    tracing::debug!(
        metric = metric.as_str(),
        points = history.len(),
        forecast = ?result.map(|r| r.value),
        "Aggregate forecast"
    );
    result
}
