//! Full analysis report
//!
//! Everything the analysis views show, computed in one pass from a history,
//! a config and a set of simulation parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::forecast::{forecast_overview, ForecastOverview};
use crate::history::History;
use crate::insights::{compare_performance, generate_insights, Insight, PerformanceComparison};
use crate::planner::{run_simulation, Simulation, SimulationParams};
use crate::totals::{compute_totals, Totals};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Fingerprint of the history the report was built from
    pub history_fingerprint: String,
    pub periods: usize,
    pub latest_period: Option<String>,
    pub totals: Option<Totals>,
    pub forecast: ForecastOverview,
    pub simulation: Simulation,
    pub insights: Vec<Insight>,
    pub comparison: Option<PerformanceComparison>,
}

impl Report {
    pub fn build(
        history: &History,
        config: &AnalysisConfig,
        params: &SimulationParams,
        today: NaiveDate,
    ) -> Result<Self> {
        let latest = history.latest();

        Ok(Self {
            history_fingerprint: history.fingerprint()?,
            periods: history.len(),
            latest_period: latest.map(|p| p.id.clone()),
            totals: latest.map(compute_totals),
            forecast: forecast_overview(history, &config.forecast_options()),
            simulation: run_simulation(history, params, today),
            insights: generate_insights(history, &config.insights, config.category_match),
            comparison: compare_performance(history, config.baseline_periods),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        crate::export::report_json(self)
    }
}
