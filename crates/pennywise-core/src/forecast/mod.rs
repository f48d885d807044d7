//! Forecasting
//!
//! - `holt` - Holt's linear method over any oldest-first series
//! - `categories` - per-category expense forecasts summed into a total
//!
//! [`forecast_overview`] bundles the forecasts the analysis views show
//! together: expenses (bottom-up), income and money left to spend.

pub mod categories;
pub mod holt;

pub use categories::{
    forecast_expenses, CategoryForecast, ExpenseForecast, ForecastBasis, ForecastOptions,
    DEFAULT_TOP_CATEGORIES,
};
pub use holt::{forecast_metric, holt_forecast, ForecastResult, TrendDirection, ALPHA, BETA};

use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::totals::Metric;

/// Next-period outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOverview {
    pub expenses: ExpenseForecast,
    /// `None` with fewer than two periods
    pub income: Option<ForecastResult>,
    /// `None` with fewer than two periods
    pub left_to_spend: Option<ForecastResult>,
}

pub fn forecast_overview(history: &History, options: &ForecastOptions) -> ForecastOverview {
    ForecastOverview {
        expenses: forecast_expenses(history, options),
        income: forecast_metric(history, Metric::Income),
        left_to_spend: forecast_metric(history, Metric::LeftToSpend),
    }
}
