//! Category Change Insight
//!
//! Looks at the categories with the most spending over the whole history and
//! reports the ones that moved noticeably between the previous and latest
//! period. A change has to clear both the percent threshold and the absolute
//! noise floor, so small categories swinging by a few units stay quiet.

use std::cmp::Ordering;

use crate::error::Result;

use super::engine::{AnalysisContext, InsightRule};
use super::types::{percent_change, Insight, InsightRuleId};

pub struct CategoryChangeInsight;

impl CategoryChangeInsight {
    /// Category keys ranked by total spend across the history
    fn top_keys(ctx: &AnalysisContext<'_>) -> Vec<(String, f64)> {
        let history = ctx.history;
        let mut totals: Vec<(String, f64)> = history
            .category_keys(ctx.strategy)
            .into_iter()
            .map(|key| {
                let total: f64 = history.category_series(&key, ctx.strategy).iter().sum();
                (key, total)
            })
            .collect();

        totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        totals.truncate(ctx.config.top_categories);
        totals
    }
}

impl InsightRule for CategoryChangeInsight {
    fn id(&self) -> InsightRuleId {
        InsightRuleId::CategoryChange
    }

    fn name(&self) -> &'static str {
        "Category Change"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Insight>> {
        let (Some(prev), Some(curr)) = (ctx.history.previous(), ctx.history.latest()) else {
            return Ok(vec![]);
        };

        let threshold = ctx.config.category_change_pct;
        let noise_floor = ctx.config.category_noise_floor;
        let mut insights = Vec::new();

        for (key, _) in Self::top_keys(ctx) {
            let before = prev.spent_in(&key, ctx.strategy);
            let after = curr.spent_in(&key, ctx.strategy);
            let delta = after - before;
            let pct = percent_change(after, before);

            if delta.abs() <= noise_floor {
                continue;
            }

            let name = ctx.history.category_name(&key, ctx.strategy);
            let insight = if pct > threshold {
                Insight::warning(format!(
                    "{} spending is up {:.0}% vs last period (+{:.2})",
                    name, pct, delta
                ))
            } else if pct < -threshold {
                Insight::positive(format!(
                    "{} spending is down {:.0}% vs last period (-{:.2})",
                    name,
                    pct.abs(),
                    delta.abs()
                ))
            } else {
                continue;
            };

            insights.push(insight.with_category(name).with_percent_change(pct));
        }

        Ok(insights)
    }
}
