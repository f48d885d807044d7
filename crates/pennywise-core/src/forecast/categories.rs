//! Bottom-up expense forecast
//!
//! Each category is forecast on its own and the results are summed, so the
//! total is attributable to individual categories. When the history holds no
//! categories at all, the aggregate outflow series is forecast instead.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::models::CategoryMatch;
use crate::totals::Metric;

use super::holt::{holt_forecast, ForecastResult};

/// Default number of categories in the ranked list
pub const DEFAULT_TOP_CATEGORIES: usize = 3;

/// Options for [`forecast_expenses`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastOptions {
    /// How categories are linked across periods
    pub strategy: CategoryMatch,
    /// Length of the ranked `top_categories` list
    pub top_n: usize,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            strategy: CategoryMatch::Name,
            top_n: DEFAULT_TOP_CATEGORIES,
        }
    }
}

/// Forecast for one expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForecast {
    /// Identity used to build the series (name or stable id)
    pub key: String,
    /// Most recent display name
    pub name: String,
    /// Forecast spend, never negative
    pub value: f64,
    pub trend: f64,
    /// Spend in the latest period
    pub last_spent: f64,
}

/// How the total was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastBasis {
    /// Sum of per-category forecasts
    Categories,
    /// No categories in history; aggregate outflow forecast directly
    AggregateFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForecast {
    pub total: ForecastResult,
    pub basis: ForecastBasis,
    /// Highest forecast categories, descending
    pub top_categories: Vec<CategoryForecast>,
    /// Every category, descending by forecast value
    pub categories: Vec<CategoryForecast>,
}

/// Forecast next-period expenses from the full history
pub fn forecast_expenses(history: &History, options: &ForecastOptions) -> ExpenseForecast {
    let keys = history.category_keys(options.strategy);

    if keys.is_empty() {
        return aggregate_fallback(history);
    }

    let mut categories: Vec<CategoryForecast> = keys
        .into_iter()
        .map(|key| {
            let series = history.category_series(&key, options.strategy);
            let last_spent = series.last().copied().unwrap_or(0.0);
            let forecast = holt_forecast(&series).unwrap_or(ForecastResult {
                value: last_spent,
                trend: 0.0,
            });

            CategoryForecast {
                name: history.category_name(&key, options.strategy),
                key,
                value: forecast.value.max(0.0),
                trend: forecast.trend,
                last_spent,
            }
        })
        .collect();

    categories.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    let total = ForecastResult {
        value: categories.iter().map(|c| c.value).sum(),
        trend: categories.iter().map(|c| c.trend).sum(),
    };

    let top_categories: Vec<CategoryForecast> =
        categories.iter().take(options.top_n).cloned().collect();

    tracing::debug!(
        categories = categories.len(),
        periods = history.len(),
        total = total.value,
        "Category expense forecast"
    );

    ExpenseForecast {
        total,
        basis: ForecastBasis::Categories,
        top_categories,
        categories,
    }
}

fn aggregate_fallback(history: &History) -> ExpenseForecast {
    let series = history.series(Metric::TotalOut);
    let total = holt_forecast(&series).unwrap_or(ForecastResult {
        value: series.last().copied().unwrap_or(0.0),
        trend: 0.0,
    });

    tracing::debug!(
        periods = history.len(),
        total = total.value,
        "No expense categories in history, forecasting aggregate outflow"
    );

    ExpenseForecast {
        total,
        basis: ForecastBasis::AggregateFallback,
        top_categories: Vec::new(),
        categories: Vec::new(),
    }
}
