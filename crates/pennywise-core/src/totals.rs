//! Period totals
//!
//! Reduces one period's line items into summary figures. Actual totals use
//! received income, spent amounts and paid bills/debts; the planned variant
//! uses planned income and budgeted amounts regardless of payment status.

use serde::{Deserialize, Serialize};

use crate::models::BudgetPeriod;

/// Summary totals for a single period
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_bills: f64,
    pub total_debts: f64,
    pub total_savings: f64,
    pub total_investments: f64,
    pub rollover: f64,
    /// Expenses + paid bills + paid debts + personal investment contributions
    pub total_out: f64,
    pub left_to_spend: f64,
    pub total_planned_income: f64,
    pub total_budgeted: f64,
    pub total_planned_bills: f64,
    pub total_planned_debts: f64,
    pub planned_out: f64,
    pub available_to_budget: f64,
}

impl Totals {
    /// `(savings + investments) / income` as a percentage, 0 without income
    pub fn savings_rate(&self) -> f64 {
        savings_rate(
            self.total_savings + self.total_investments,
            self.total_income,
        )
    }
}

pub(crate) fn savings_rate(saved: f64, income: f64) -> f64 {
    if income == 0.0 {
        0.0
    } else {
        saved / income * 100.0
    }
}

/// Compute totals for one period
pub fn compute_totals(period: &BudgetPeriod) -> Totals {
    let total_income: f64 = period.income.iter().map(|i| i.actual).sum();
    let total_expenses: f64 = period.expenses.iter().map(|c| c.spent).sum();
    let total_bills: f64 = period
        .bills
        .iter()
        .filter(|b| b.paid)
        .map(|b| b.amount)
        .sum();
    let total_debts: f64 = period
        .debts
        .iter()
        .filter(|d| d.paid)
        .map(|d| d.payment)
        .sum();
    let total_savings: f64 = period.savings.iter().map(|s| s.amount).sum();
    let total_investments: f64 = period
        .investments
        .iter()
        .filter(|i| i.is_personal())
        .map(|i| i.amount)
        .sum();

    let total_out = total_expenses + total_bills + total_debts + total_investments;
    let left_to_spend = total_income + period.rollover - total_out - total_savings;

    let total_planned_income: f64 = period.income.iter().map(|i| i.planned).sum();
    let total_budgeted: f64 = period.expenses.iter().map(|c| c.budgeted).sum();
    let total_planned_bills: f64 = period.bills.iter().map(|b| b.amount).sum();
    let total_planned_debts: f64 = period.debts.iter().map(|d| d.payment).sum();

    let planned_out = total_budgeted + total_planned_bills + total_planned_debts + total_investments;
    let available_to_budget = total_planned_income + period.rollover - planned_out - total_savings;

    Totals {
        total_income,
        total_expenses,
        total_bills,
        total_debts,
        total_savings,
        total_investments,
        rollover: period.rollover,
        total_out,
        left_to_spend,
        total_planned_income,
        total_budgeted,
        total_planned_bills,
        total_planned_debts,
        planned_out,
        available_to_budget,
    }
}

/// A numeric series that can be read off [`Totals`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Income,
    Expenses,
    Bills,
    Debts,
    Savings,
    Investments,
    TotalOut,
    LeftToSpend,
    AvailableToBudget,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expenses => "expenses",
            Self::Bills => "bills",
            Self::Debts => "debts",
            Self::Savings => "savings",
            Self::Investments => "investments",
            Self::TotalOut => "total_out",
            Self::LeftToSpend => "left_to_spend",
            Self::AvailableToBudget => "available_to_budget",
        }
    }

    pub fn value(&self, totals: &Totals) -> f64 {
        match self {
            Self::Income => totals.total_income,
            Self::Expenses => totals.total_expenses,
            Self::Bills => totals.total_bills,
            Self::Debts => totals.total_debts,
            Self::Savings => totals.total_savings,
            Self::Investments => totals.total_investments,
            Self::TotalOut => totals.total_out,
            Self::LeftToSpend => totals.left_to_spend,
            Self::AvailableToBudget => totals.available_to_budget,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
