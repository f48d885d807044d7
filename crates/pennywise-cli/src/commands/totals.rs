//! Totals command

use anyhow::{Context, Result};
use pennywise_core::{compute_totals, History};

use super::print_json;

pub fn cmd_totals(history: &History, period_id: Option<&str>, json: bool) -> Result<()> {
    let period = match period_id {
        Some(id) => history
            .find(id)
            .with_context(|| format!("Period not found: {}", id))?,
        None => match history.latest() {
            Some(p) => p,
            None => {
                println!("No budget periods in history.");
                return Ok(());
            }
        },
    };

    let totals = compute_totals(period);

    if json {
        return print_json(&serde_json::json!({
            "period_id": period.id,
            "label": period.label(),
            "totals": totals,
            "savings_rate": totals.savings_rate(),
        }));
    }

    println!();
    println!("💰 Totals for {} ({})", period.label(), period.period_type);
    println!("   ─────────────────────────────────────");
    println!("   Income received:      {:>12.2}", totals.total_income);
    println!("   Rollover:             {:>12.2}", totals.rollover);
    println!("   Expenses:             {:>12.2}", totals.total_expenses);
    println!("   Bills paid:           {:>12.2}", totals.total_bills);
    println!("   Debt payments:        {:>12.2}", totals.total_debts);
    println!("   Investments:          {:>12.2}", totals.total_investments);
    println!("   Savings:              {:>12.2}", totals.total_savings);
    println!("   ─────────────────────────────────────");
    println!("   Total out:            {:>12.2}", totals.total_out);
    println!("   Left to spend:        {:>12.2}", totals.left_to_spend);
    println!("   Savings rate:         {:>11.1}%", totals.savings_rate());
    println!();
    println!("   Planned");
    println!("   Income:               {:>12.2}", totals.total_planned_income);
    println!("   Budgeted + committed: {:>12.2}", totals.planned_out);
    println!("   Available to budget:  {:>12.2}", totals.available_to_budget);

    if totals.left_to_spend < 0.0 {
        println!();
        println!("⚠️  Spending exceeds income for this period.");
    }

    Ok(())
}
