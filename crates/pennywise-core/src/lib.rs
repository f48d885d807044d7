//! Pennywise Core Library
//!
//! The analysis engine behind the Pennywise budgeting app:
//! - Budget period model and history loading
//! - Period totals (actual and planned)
//! - Holt's linear forecasting, per category and aggregated
//! - Goal allocation simulator with priority-weighted surplus split
//! - Insight rules and performance comparison against a rolling baseline
//! - Analysis configuration with embedded defaults
//! - CSV export of per-period series
//!
//! Every analysis function is pure: it borrows the history and parameters it
//! is given and returns freshly computed values.

pub mod config;
pub mod error;
pub mod export;
pub mod forecast;
pub mod history;
pub mod insights;
pub mod models;
pub mod planner;
pub mod report;
pub mod totals;

/// Test utilities including period fixture builders
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{AnalysisConfig, InsightConfig};
pub use error::{Error, Result};
pub use forecast::{
    forecast_expenses, forecast_metric, forecast_overview, holt_forecast, ExpenseForecast,
    ForecastOptions, ForecastOverview, ForecastResult, TrendDirection,
};
pub use history::History;
pub use insights::{compare_performance, generate_insights, Insight, InsightKind, PerformanceComparison};
pub use models::{BudgetPeriod, CategoryMatch, ExpenseCategory, Goal, PeriodType};
pub use planner::{run_simulation, simulate_allocation, AllocationResult, Simulation, SimulationParams};
pub use report::Report;
pub use totals::{compute_totals, Metric, Totals};
