//! What-if scenarios
//!
//! Applies income/expense adjustments to the latest period's totals and feeds
//! the resulting surplus into the allocation simulator.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::totals::{compute_totals, Totals};

use super::allocation::{simulate_allocation, AllocationResult};

/// Simulation inputs, passed in fresh on every recalculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Percent change applied to income (e.g. `10.0` for +10%)
    pub income_adjustment_pct: f64,
    /// Percent change applied to outflow (e.g. `-5.0` for -5%)
    pub expense_adjustment_pct: f64,
    /// Goals that get the larger share of the surplus
    pub priority_goal_ids: HashSet<String>,
}

impl SimulationParams {
    pub fn with_priority<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_goal_ids.extend(ids.into_iter().map(Into::into));
        self
    }
}

/// Outcome of one scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Id of the period the baseline was taken from
    pub period_id: Option<String>,
    pub baseline_income: f64,
    pub baseline_out: f64,
    pub simulated_income: f64,
    pub simulated_out: f64,
    pub net_surplus: f64,
    pub allocations: Vec<AllocationResult>,
}

fn adjust(amount: f64, pct: f64) -> f64 {
    amount * (1.0 + pct / 100.0)
}

/// Simulated income minus simulated outflow
pub fn net_surplus(totals: &Totals, params: &SimulationParams) -> f64 {
    adjust(totals.total_income, params.income_adjustment_pct)
        - adjust(totals.total_out, params.expense_adjustment_pct)
}

/// Run a scenario against the latest period in `history`.
///
/// An empty history produces a zero surplus and no allocations.
pub fn run_simulation(history: &History, params: &SimulationParams, today: NaiveDate) -> Simulation {
    let Some(latest) = history.latest() else {
        return Simulation {
            period_id: None,
            baseline_income: 0.0,
            baseline_out: 0.0,
            simulated_income: 0.0,
            simulated_out: 0.0,
            net_surplus: 0.0,
            allocations: Vec::new(),
        };
    };

    let totals = compute_totals(latest);
    let surplus = net_surplus(&totals, params);
    let allocations = simulate_allocation(&latest.goals, surplus, &params.priority_goal_ids, today);

    tracing::debug!(
        period = latest.id.as_str(),
        income_adjustment = params.income_adjustment_pct,
        expense_adjustment = params.expense_adjustment_pct,
        net_surplus = surplus,
        goals = allocations.len(),
        "Simulation complete"
    );

    Simulation {
        period_id: Some(latest.id.clone()),
        baseline_income: totals.total_income,
        baseline_out: totals.total_out,
        simulated_income: adjust(totals.total_income, params.income_adjustment_pct),
        simulated_out: adjust(totals.total_out, params.expense_adjustment_pct),
        net_surplus: surplus,
        allocations,
    }
}
