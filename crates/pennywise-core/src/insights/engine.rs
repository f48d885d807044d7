//! Insight Engine - runs insight rules over a budget history

use crate::config::InsightConfig;
use crate::history::History;
use crate::models::CategoryMatch;
use crate::Result;

use super::types::{Insight, InsightRuleId};
use super::{CategoryChangeInsight, ExpenseTrendInsight};

/// Minimum periods needed before any comparison is meaningful
pub const MIN_PERIODS: usize = 2;

/// Context provided to insight rules
pub struct AnalysisContext<'a> {
    /// Chronologically sorted history
    pub history: &'a History,
    pub config: &'a InsightConfig,
    /// How categories are linked across periods
    pub strategy: CategoryMatch,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(history: &'a History, config: &'a InsightConfig, strategy: CategoryMatch) -> Self {
        Self {
            history,
            config,
            strategy,
        }
    }
}

/// Trait for insight rules
pub trait InsightRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> InsightRuleId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze the history and produce insights.
    ///
    /// Only called with at least [`MIN_PERIODS`] periods.
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Insight>>;
}

/// Runs every registered rule and ranks the combined output
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(ExpenseTrendInsight));
        engine.register(Box::new(CategoryChangeInsight));

        engine
    }

    /// Create an engine with no rules registered
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run all rules.
    ///
    /// With too little history a single neutral insight is returned. Output
    /// is ordered warning, positive, neutral (stable within a kind) and
    /// truncated to `max_insights`.
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        if ctx.history.len() < MIN_PERIODS {
            return vec![Insight::neutral(
                "Track at least two budget periods to see spending insights",
            )];
        }

        let mut all = vec![];

        for rule in &self.rules {
            match rule.analyze(ctx) {
                Ok(insights) => {
                    tracing::debug!(
                        rule = rule.id().as_str(),
                        count = insights.len(),
                        "Insight rule complete"
                    );
                    all.extend(insights);
                }
                Err(e) => {
                    tracing::warn!(
                        rule = rule.id().as_str(),
                        error = %e,
                        "Insight rule failed"
                    );
                }
            }
        }

        all.sort_by_key(|i| i.kind.rank());
        all.truncate(ctx.config.max_insights);
        all
    }

    /// Ids of the registered rules
    pub fn rule_ids(&self) -> Vec<InsightRuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

/// Run the built-in rules over `history`
pub fn generate_insights(
    history: &History,
    config: &InsightConfig,
    strategy: CategoryMatch,
) -> Vec<Insight> {
    let ctx = AnalysisContext::new(history, config, strategy);
    InsightEngine::new().analyze_all(&ctx)
}
