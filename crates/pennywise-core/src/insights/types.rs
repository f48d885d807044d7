//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rules that can produce insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRuleId {
    /// Total expenses vs the previous period
    ExpenseTrend,
    /// Largest categories vs the previous period
    CategoryChange,
}

impl InsightRuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightRuleId::ExpenseTrend => "expense_trend",
            InsightRuleId::CategoryChange => "category_change",
        }
    }
}

impl fmt::Display for InsightRuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Something moved the wrong way
    Warning,
    /// Something improved
    Positive,
    /// Informational
    Neutral,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Positive => "positive",
            InsightKind::Neutral => "neutral",
        }
    }

    /// Sort position (lower = shown first)
    pub fn rank(&self) -> u8 {
        match self {
            InsightKind::Warning => 0,
            InsightKind::Positive => 1,
            InsightKind::Neutral => 2,
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(InsightKind::Warning),
            "positive" => Ok(InsightKind::Positive),
            "neutral" => Ok(InsightKind::Neutral),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// A qualitative observation about recent spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub text: String,
    /// Category the insight is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Raw percent change behind the insight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
}

impl Insight {
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            category: None,
            percent_change: None,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(InsightKind::Warning, text)
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self::new(InsightKind::Positive, text)
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(InsightKind::Neutral, text)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_percent_change(mut self, pct: f64) -> Self {
        self.percent_change = Some(pct);
        self
    }
}

/// Percent change from `previous` to `current`, 0 when `previous` is 0
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_rank_order() {
        assert!(InsightKind::Warning.rank() < InsightKind::Positive.rank());
        assert!(InsightKind::Positive.rank() < InsightKind::Neutral.rank());
        assert_eq!(InsightKind::from_str("positive").unwrap(), InsightKind::Positive);
        assert!(InsightKind::from_str("alert").is_err());
    }

    #[test]
    fn test_insight_serializes_type_field() {
        let insight = Insight::warning("Spending up").with_percent_change(12.0);
        let json = serde_json::to_value(&insight).unwrap();

        assert_eq!(json["type"], "warning");
        assert_eq!(json["percent_change"], 12.0);
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_percent_change_zero_base() {
        assert_eq!(percent_change(100.0, 0.0), 0.0);
        assert_eq!(percent_change(150.0, 100.0), 50.0);
        assert_eq!(percent_change(50.0, 100.0), -50.0);
    }
}
