//! Expense Trend Insight
//!
//! Compares total expenses in the latest period with the period before it.

use crate::error::Result;
use crate::totals::compute_totals;

use super::engine::{AnalysisContext, InsightRule};
use super::types::{percent_change, Insight, InsightRuleId};

/// Flags a rise or drop in total expenses beyond `expense_trend_pct`
pub struct ExpenseTrendInsight;

impl InsightRule for ExpenseTrendInsight {
    fn id(&self) -> InsightRuleId {
        InsightRuleId::ExpenseTrend
    }

    fn name(&self) -> &'static str {
        "Expense Trend"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Insight>> {
        let (Some(prev), Some(curr)) = (ctx.history.previous(), ctx.history.latest()) else {
            return Ok(vec![]);
        };

        let prev_expenses = compute_totals(prev).total_expenses;
        let curr_expenses = compute_totals(curr).total_expenses;
        let pct = percent_change(curr_expenses, prev_expenses);
        let threshold = ctx.config.expense_trend_pct;

        let insight = if pct > threshold {
            Insight::warning(format!(
                "Total spending is up {:.0}% compared to last period",
                pct
            ))
        } else if pct < -threshold {
            Insight::positive(format!(
                "Total spending is down {:.0}% compared to last period",
                pct.abs()
            ))
        } else {
            return Ok(vec![]);
        };

        Ok(vec![insight.with_percent_change(pct)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InsightConfig;
    use crate::history::History;
    use crate::insights::InsightKind;
    use crate::models::CategoryMatch;
    use crate::test_utils::spending_period;

    fn run(prev: f64, curr: f64) -> Vec<Insight> {
        let history = History::new(vec![
            spending_period("p1", 2026, 1, &[("All", prev)]),
            spending_period("p2", 2026, 2, &[("All", curr)]),
        ]);
        let config = InsightConfig::default();
        let ctx = AnalysisContext::new(&history, &config, CategoryMatch::Name);
        ExpenseTrendInsight.analyze(&ctx).unwrap()
    }

    #[test]
    fn test_increase_above_threshold_warns() {
        let insights = run(1000.0, 1060.0);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert!(insights[0].text.contains("up 6%"), "{}", insights[0].text);
    }

    #[test]
    fn test_exact_threshold_is_silent() {
        assert!(run(1000.0, 1050.0).is_empty());
        assert!(run(1000.0, 950.0).is_empty());
    }

    #[test]
    fn test_decrease_is_positive() {
        let insights = run(1000.0, 800.0);

        assert_eq!(insights[0].kind, InsightKind::Positive);
        assert!(insights[0].text.contains("down 20%"));
        assert!((insights[0].percent_change.unwrap() + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_previous_is_silent() {
        assert!(run(0.0, 500.0).is_empty());
    }
}
