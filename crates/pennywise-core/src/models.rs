//! Domain models for Pennywise
//!
//! One concrete record type per budget collection. Numeric fields read as
//! zero when absent, null or malformed, and collections default to empty, so
//! the analytics never have to guard against missing values.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Amount shapes seen in history exports
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Read an amount, treating null, non-numeric strings and other junk as 0
fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => n,
        RawAmount::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        RawAmount::Other(_) => 0.0,
    };
    Ok(if amount.is_finite() { amount } else { 0.0 })
}

/// Budgeting cycle of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    Custom,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Custom => "custom",
        }
    }
}

impl std::str::FromStr for PeriodType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" | "annual" => Ok(Self::Yearly),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("Unknown period type: {}", s)),
        }
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An income source with planned and received amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IncomeSource {
    pub name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub planned: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub actual: f64,
}

/// A spending category within a period
///
/// `id` is optional: histories produced before stable ids existed only carry
/// the name, which is then the category's identity across periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExpenseCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub budgeted: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub spent: f64,
}

/// A bill; only counted toward actual outflow once paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Bill {
    pub name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    pub paid: bool,
}

/// A debt with its outstanding balance and the payment made this period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Debt {
    pub name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub balance: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub payment: f64,
    pub paid: bool,
}

/// A savings fund; `amount` is this period's contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SavingsFund {
    pub name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub balance: f64,
}

/// Ownership of an investment contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentType {
    Personal,
    Business,
}

/// An investment; `amount` is this period's contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Investment {
    pub name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub balance: f64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub investment_type: Option<InvestmentType>,
}

impl Investment {
    /// Business investments are tracked but never counted as household outflow
    pub fn is_personal(&self) -> bool {
        !matches!(self.investment_type, Some(InvestmentType::Business))
    }
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub target: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub current: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub monthly_contribution: f64,
    /// Marked complete by the user
    pub checked: bool,
}

impl Goal {
    /// Amount still needed to reach the target (never negative)
    pub fn remaining(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }

    /// Percent of target saved, capped at 100
    pub fn progress_pct(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }

    /// Record a contribution toward the goal. Negative amounts are ignored.
    pub fn contribute(&mut self, amount: f64) {
        if amount > 0.0 {
            self.current += amount;
        }
    }

    /// Flip the completed flag.
    ///
    /// Completing a goal credits whatever is still remaining so that
    /// `current` matches `target`; reopening it leaves `current` as is.
    pub fn toggle_complete(&mut self) {
        if !self.checked {
            let remaining = self.remaining();
            self.contribute(remaining);
        }
        self.checked = !self.checked;
    }
}

/// One budgeting cycle snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub id: String,
    #[serde(default)]
    pub period_type: PeriodType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Creation time; the chronological key for time series
    pub created: DateTime<Utc>,
    /// Balance carried over from the previous period
    #[serde(default, deserialize_with = "lenient_amount")]
    pub rollover: f64,
    #[serde(default)]
    pub income: Vec<IncomeSource>,
    #[serde(default)]
    pub expenses: Vec<ExpenseCategory>,
    #[serde(default)]
    pub bills: Vec<Bill>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub savings: Vec<SavingsFund>,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

impl BudgetPeriod {
    /// Short human label: `YYYY-MM` when month and year are known, else the id
    pub fn label(&self) -> String {
        match (self.year, self.month) {
            (Some(year), Some(month)) => format!("{:04}-{:02}", year, month),
            _ => self.id.clone(),
        }
    }

    /// Amount spent in the category identified by `key` under `strategy`
    pub fn spent_in(&self, key: &str, strategy: CategoryMatch) -> f64 {
        self.expenses
            .iter()
            .filter(|c| strategy.key_for(c) == key)
            .map(|c| c.spent)
            .sum()
    }
}

/// How expense categories are linked across periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    /// Exact name equality. Renaming a category starts a new series.
    #[default]
    Name,
    /// Stable category id, falling back to the name when no id is present
    Id,
}

impl CategoryMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
        }
    }

    /// Identity of a category under this strategy
    pub fn key_for<'a>(&self, category: &'a ExpenseCategory) -> &'a str {
        match self {
            Self::Name => &category.name,
            Self::Id => category.id.as_deref().unwrap_or(&category.name),
        }
    }
}

impl std::str::FromStr for CategoryMatch {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "id" => Ok(Self::Id),
            _ => Err(format!("Unknown category match strategy: {}", s)),
        }
    }
}

impl std::fmt::Display for CategoryMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
