//! Simulate command

use anyhow::Result;
use chrono::NaiveDate;
use pennywise_core::planner::PAUSED_MONTHS;
use pennywise_core::{run_simulation, History, SimulationParams};

use super::{print_json, signed, truncate};

pub fn cmd_simulate(
    history: &History,
    params: &SimulationParams,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let unknown: Vec<&String> = match history.latest() {
        Some(latest) => params
            .priority_goal_ids
            .iter()
            .filter(|id| !latest.goals.iter().any(|g| &g.id == *id))
            .collect(),
        None => Vec::new(),
    };
    for id in &unknown {
        tracing::warn!(goal = id.as_str(), "Priority goal not found in latest period");
    }

    let sim = run_simulation(history, params, today);

    if json {
        return print_json(&sim);
    }

    let Some(period_id) = sim.period_id.as_deref() else {
        println!("No budget periods in history.");
        return Ok(());
    };

    println!();
    println!("🎯 Goal Allocation Simulation");
    println!("   Period: {}  Starting: {}", period_id, today);
    println!("   ─────────────────────────────────────────────────────");
    println!(
        "   Income:   {:>12.2} → {:>12.2}  ({}%)",
        sim.baseline_income,
        sim.simulated_income,
        signed(params.income_adjustment_pct)
    );
    println!(
        "   Outflow:  {:>12.2} → {:>12.2}  ({}%)",
        sim.baseline_out,
        sim.simulated_out,
        signed(params.expense_adjustment_pct)
    );
    println!("   Surplus:  {:>12.2}", sim.net_surplus);

    if sim.allocations.is_empty() {
        println!();
        println!("   No savings goals in the latest period.");
        return Ok(());
    }

    if sim.net_surplus <= 0.0 {
        println!();
        println!("⚠️  No surplus to allocate. Open goals are paused.");
    }

    println!();
    println!(
        "   {:22} │ {:>10} │ {:>8} │ {:>8} │ {:>10}",
        "Goal", "Monthly", "Months", "Saved", "Done by"
    );
    println!("   ───────────────────────┼────────────┼──────────┼──────────┼────────────");

    for a in &sim.allocations {
        let name = if a.is_priority {
            format!("★ {}", a.name)
        } else {
            a.name.clone()
        };

        if a.is_completed {
            println!(
                "   {:22} │ {:>10} │ {:>8} │ {:>8} │ {:>10}",
                truncate(&name, 22),
                "-",
                "-",
                "-",
                "✅ done"
            );
            continue;
        }

        let months = if a.months_to_complete == PAUSED_MONTHS {
            "paused".to_string()
        } else {
            a.months_to_complete.to_string()
        };
        let done_by = if a.months_to_complete == PAUSED_MONTHS {
            "-".to_string()
        } else {
            a.completion_date.format("%Y-%m").to_string()
        };

        println!(
            "   {:22} │ {:>10.2} │ {:>8} │ {:>8} │ {:>10}",
            truncate(&name, 22),
            a.simulated_monthly,
            months,
            a.time_saved,
            done_by
        );
    }

    let accelerated = sim.allocations.iter().filter(|a| a.is_accelerated).count();
    if accelerated > 0 {
        println!();
        println!("✨ {} goal(s) finish sooner than at their current pace.", accelerated);
    }

    Ok(())
}
