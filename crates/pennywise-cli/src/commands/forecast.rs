//! Forecast command

use anyhow::Result;
use pennywise_core::forecast::ForecastBasis;
use pennywise_core::{forecast_overview, AnalysisConfig, ForecastResult, History, TrendDirection};

use super::{print_json, signed, truncate};

fn arrow(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Rising => "↑",
        TrendDirection::Falling => "↓",
        TrendDirection::Flat => "→",
    }
}

fn print_outlook(label: &str, result: Option<ForecastResult>) {
    match result {
        Some(r) => println!(
            "   {:20} {:>12.2}  {} {}",
            label,
            r.value,
            arrow(r.direction()),
            signed(r.trend)
        ),
        None => println!("   {:20} {:>12}", label, "n/a"),
    }
}

pub fn cmd_forecast(
    history: &History,
    config: &AnalysisConfig,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut options = config.forecast_options();
    if let Some(n) = top {
        options.top_n = n;
    }

    let overview = forecast_overview(history, &options);

    if json {
        return print_json(&overview);
    }

    if history.is_empty() {
        println!("No budget periods in history.");
        return Ok(());
    }

    let expenses = &overview.expenses;

    println!();
    println!("🔮 Next Period Forecast");
    println!("   Based on {} period(s)", history.len());
    println!("   ─────────────────────────────────────────────────────");
    print_outlook("Expenses", Some(expenses.total));
    print_outlook("Income", overview.income);
    print_outlook("Left to spend", overview.left_to_spend);

    if expenses.basis == ForecastBasis::AggregateFallback {
        println!();
        println!("   💡 No expense categories found; forecasting total outflow instead.");
        return Ok(());
    }

    println!();
    println!(
        "   {:25} │ {:>10} │ {:>10} │ {:>10}",
        "Category", "Last", "Forecast", "Trend"
    );
    println!("   ──────────────────────────┼────────────┼────────────┼────────────");

    for cat in &expenses.top_categories {
        println!(
            "   {:25} │ {:>10.2} │ {:>10.2} │ {:>10}",
            truncate(&cat.name, 25),
            cat.last_spent,
            cat.value,
            signed(cat.trend)
        );
    }

    let hidden = expenses.categories.len().saturating_sub(expenses.top_categories.len());
    if hidden > 0 {
        println!("   ... and {} more categories", hidden);
    }

    Ok(())
}
