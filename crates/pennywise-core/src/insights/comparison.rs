//! Performance comparison
//!
//! Measures the latest period against a baseline built from the periods
//! right before it: the average of up to `baseline_periods` prior periods,
//! or only the previous period when fewer than two prior periods exist.

use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::totals::{compute_totals, savings_rate, Totals};

use super::types::percent_change;

/// Current value against its baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricVariance {
    pub current: f64,
    pub baseline: f64,
    pub difference: f64,
    /// Percent change vs baseline, 0 when the baseline is 0
    pub percent: f64,
}

impl MetricVariance {
    fn new(current: f64, baseline: f64) -> Self {
        Self {
            current,
            baseline,
            difference: current - baseline,
            percent: percent_change(current, baseline),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsRateChange {
    /// `(savings + investments) / income * 100` for the latest period
    pub current: f64,
    /// Same ratio over the averaged baseline
    pub baseline: f64,
    /// Percentage points gained (negative when the rate fell)
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceComparison {
    pub period_id: String,
    /// Periods averaged into the baseline, oldest first
    pub baseline_period_ids: Vec<String>,
    pub income: MetricVariance,
    pub expenses: MetricVariance,
    pub savings_rate: SavingsRateChange,
}

/// Compare the latest period with its baseline.
///
/// Returns `None` with fewer than two periods.
pub fn compare_performance(history: &History, baseline_periods: usize) -> Option<PerformanceComparison> {
    let (latest, prior) = history.periods().split_last()?;
    if prior.is_empty() {
        return None;
    }

    let window = if prior.len() < 2 {
        1
    } else {
        baseline_periods.clamp(1, prior.len())
    };
    let baseline_slice = &prior[prior.len() - window..];

    let current = compute_totals(latest);
    let baseline = average(&baseline_slice.iter().map(compute_totals).collect::<Vec<_>>());

    let current_rate = current.savings_rate();
    let baseline_rate = savings_rate(
        baseline.total_savings + baseline.total_investments,
        baseline.total_income,
    );

    tracing::debug!(
        period = latest.id.as_str(),
        baseline_periods = window,
        "Performance comparison"
    );

    Some(PerformanceComparison {
        period_id: latest.id.clone(),
        baseline_period_ids: baseline_slice.iter().map(|p| p.id.clone()).collect(),
        income: MetricVariance::new(current.total_income, baseline.total_income),
        expenses: MetricVariance::new(current.total_expenses, baseline.total_expenses),
        savings_rate: SavingsRateChange {
            current: current_rate,
            baseline: baseline_rate,
            delta: current_rate - baseline_rate,
        },
    })
}

/// Field-wise mean of the figures the comparison uses
fn average(totals: &[Totals]) -> Totals {
    let n = totals.len().max(1) as f64;
    let mean = |f: fn(&Totals) -> f64| totals.iter().map(f).sum::<f64>() / n;

    Totals {
        total_income: mean(|t| t.total_income),
        total_expenses: mean(|t| t.total_expenses),
        total_savings: mean(|t| t.total_savings),
        total_investments: mean(|t| t.total_investments),
        ..Totals::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::PeriodBuilder;

    fn period(id: &str, month: u32, income: f64, spent: f64, saved: f64) -> crate::models::BudgetPeriod {
        PeriodBuilder::new(id, 2026, month)
            .income("Salary", 0.0, income)
            .expense("Living", 0.0, spent)
            .savings("Emergency", saved)
            .build()
    }

    #[test]
    fn test_requires_two_periods() {
        assert!(compare_performance(&History::default(), 3).is_none());
        let single = History::new(vec![period("p1", 1, 1000.0, 500.0, 0.0)]);
        assert!(compare_performance(&single, 3).is_none());
    }

    #[test]
    fn test_single_prior_period_is_baseline() {
        let history = History::new(vec![
            period("p1", 1, 2000.0, 1000.0, 200.0),
            period("p2", 2, 2500.0, 1200.0, 500.0),
        ]);

        let cmp = compare_performance(&history, 3).unwrap();

        assert_eq!(cmp.baseline_period_ids, vec!["p1"]);
        assert_eq!(cmp.income.difference, 500.0);
        assert_eq!(cmp.income.percent, 25.0);
        assert_eq!(cmp.expenses.percent, 20.0);
        assert_eq!(cmp.savings_rate.current, 20.0);
        assert_eq!(cmp.savings_rate.baseline, 10.0);
        assert_eq!(cmp.savings_rate.delta, 10.0);
    }

    #[test]
    fn test_averages_up_to_three_prior_periods() {
        let history = History::new(vec![
            period("p1", 1, 9999.0, 9999.0, 0.0),
            period("p2", 2, 1000.0, 600.0, 0.0),
            period("p3", 3, 2000.0, 900.0, 0.0),
            period("p4", 4, 3000.0, 1200.0, 0.0),
            period("p5", 5, 2000.0, 1800.0, 0.0),
        ]);

        let cmp = compare_performance(&history, 3).unwrap();

        assert_eq!(cmp.baseline_period_ids, vec!["p2", "p3", "p4"]);
        assert_eq!(cmp.income.baseline, 2000.0);
        assert_eq!(cmp.income.percent, 0.0);
        assert_eq!(cmp.expenses.baseline, 900.0);
        assert_eq!(cmp.expenses.percent, 100.0);
    }

    #[test]
    fn test_two_prior_periods_are_averaged() {
        let history = History::new(vec![
            period("p1", 1, 1000.0, 400.0, 0.0),
            period("p2", 2, 3000.0, 800.0, 0.0),
            period("p3", 3, 2000.0, 600.0, 0.0),
        ]);

        let cmp = compare_performance(&history, 3).unwrap();
        assert_eq!(cmp.baseline_period_ids, vec!["p1", "p2"]);
        assert_eq!(cmp.expenses.baseline, 600.0);
        assert_eq!(cmp.expenses.difference, 0.0);
    }

    #[test]
    fn test_zero_income_baseline() {
        let history = History::new(vec![
            period("p1", 1, 0.0, 100.0, 0.0),
            period("p2", 2, 1000.0, 100.0, 100.0),
        ]);

        let cmp = compare_performance(&history, 3).unwrap();
        assert_eq!(cmp.income.percent, 0.0);
        assert_eq!(cmp.savings_rate.baseline, 0.0);
        assert_eq!(cmp.savings_rate.current, 10.0);
    }
}
