//! Insight Engine - Spending Observations
//!
//! Compares the latest budget period with what came before and surfaces short,
//! threshold-triggered observations the UI can show as badges.
//!
//! ## Built-in Rules
//!
//! - **Expense Trend** - total expenses vs the previous period
//! - **Category Change** - the largest categories vs the previous period
//!
//! The performance comparison (income, expenses and savings rate against a
//! rolling baseline) lives alongside in `comparison`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pennywise_core::insights::generate_insights;
//!
//! let insights = generate_insights(&history, &config.insights, config.category_match);
//! ```

pub mod category_changes;
pub mod comparison;
pub mod engine;
pub mod expense_trend;
pub mod types;

pub use category_changes::CategoryChangeInsight;
pub use comparison::{compare_performance, MetricVariance, PerformanceComparison, SavingsRateChange};
pub use engine::{generate_insights, AnalysisContext, InsightEngine, InsightRule, MIN_PERIODS};
pub use expense_trend::ExpenseTrendInsight;
pub use types::{percent_change, Insight, InsightKind, InsightRuleId};
