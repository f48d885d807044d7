//! Test utilities
//!
//! Fixture builders for budget periods and goals. Compiled for unit tests and
//! behind the `test-utils` feature for integration tests in other crates.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Bill, BudgetPeriod, Debt, ExpenseCategory, Goal, IncomeSource, Investment, InvestmentType,
    PeriodType, SavingsFund,
};

/// Builder for a monthly [`BudgetPeriod`] created on the 1st of its month
pub struct PeriodBuilder {
    period: BudgetPeriod,
}

impl PeriodBuilder {
    pub fn new(id: &str, year: i32, month: u32) -> Self {
        let created = Utc
            .with_ymd_and_hms(year, month, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("invalid fixture month {}-{}", year, month));

        Self {
            period: BudgetPeriod {
                id: id.to_string(),
                period_type: PeriodType::Monthly,
                month: Some(month),
                year: Some(year),
                created,
                rollover: 0.0,
                income: Vec::new(),
                expenses: Vec::new(),
                bills: Vec::new(),
                debts: Vec::new(),
                goals: Vec::new(),
                savings: Vec::new(),
                investments: Vec::new(),
            },
        }
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.period.created = created;
        self
    }

    pub fn rollover(mut self, amount: f64) -> Self {
        self.period.rollover = amount;
        self
    }

    pub fn income(mut self, name: &str, planned: f64, actual: f64) -> Self {
        self.period.income.push(IncomeSource {
            name: name.to_string(),
            planned,
            actual,
        });
        self
    }

    pub fn expense(mut self, name: &str, budgeted: f64, spent: f64) -> Self {
        self.period.expenses.push(ExpenseCategory {
            id: None,
            name: name.to_string(),
            budgeted,
            spent,
        });
        self
    }

    pub fn expense_with_id(mut self, id: &str, name: &str, budgeted: f64, spent: f64) -> Self {
        self.period.expenses.push(ExpenseCategory {
            id: Some(id.to_string()),
            name: name.to_string(),
            budgeted,
            spent,
        });
        self
    }

    pub fn bill(mut self, name: &str, amount: f64, paid: bool) -> Self {
        self.period.bills.push(Bill {
            name: name.to_string(),
            amount,
            paid,
        });
        self
    }

    pub fn debt(mut self, name: &str, balance: f64, payment: f64, paid: bool) -> Self {
        self.period.debts.push(Debt {
            name: name.to_string(),
            balance,
            payment,
            paid,
        });
        self
    }

    pub fn savings(mut self, name: &str, amount: f64) -> Self {
        self.period.savings.push(SavingsFund {
            name: name.to_string(),
            amount,
            balance: 0.0,
        });
        self
    }

    pub fn investment(
        mut self,
        name: &str,
        amount: f64,
        investment_type: Option<InvestmentType>,
    ) -> Self {
        self.period.investments.push(Investment {
            name: name.to_string(),
            amount,
            balance: 0.0,
            investment_type,
        });
        self
    }

    pub fn goal(mut self, goal: Goal) -> Self {
        self.period.goals.push(goal);
        self
    }

    pub fn build(self) -> BudgetPeriod {
        self.period
    }
}

/// An open goal with the given amounts
pub fn goal(id: &str, target: f64, current: f64, monthly_contribution: f64) -> Goal {
    Goal {
        id: id.to_string(),
        name: id.to_string(),
        target,
        current,
        monthly_contribution,
        checked: false,
    }
}

/// A goal already marked complete
pub fn completed_goal(id: &str, target: f64) -> Goal {
    Goal {
        checked: true,
        current: target,
        ..goal(id, target, target, 0.0)
    }
}

/// A period whose only line items are the given `(category, spent)` pairs
pub fn spending_period(id: &str, year: i32, month: u32, spent: &[(&str, f64)]) -> BudgetPeriod {
    spent
        .iter()
        .fold(PeriodBuilder::new(id, year, month), |builder, (name, amount)| {
            builder.expense(name, 0.0, *amount)
        })
        .build()
}
