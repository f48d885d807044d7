//! Insight and comparison commands

use anyhow::Result;
use pennywise_core::insights::MetricVariance;
use pennywise_core::{compare_performance, generate_insights, AnalysisConfig, History, InsightKind};

use super::{print_json, signed};

fn icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "⚠️ ",
        InsightKind::Positive => "✅",
        InsightKind::Neutral => "💡",
    }
}

pub fn cmd_insights(history: &History, config: &AnalysisConfig, json: bool) -> Result<()> {
    let insights = generate_insights(history, &config.insights, config.category_match);

    if json {
        return print_json(&insights);
    }

    println!();
    println!("🔍 Spending Insights");
    println!("   ─────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   Nothing unusual compared to last period.");
        return Ok(());
    }

    for insight in &insights {
        println!("   {} {}", icon(insight.kind), insight.text);
    }

    Ok(())
}

fn print_variance(label: &str, v: &MetricVariance) {
    println!(
        "   {:12} {:>12.2} │ {:>12.2} │ {:>12} │ {:>7.1}%",
        label,
        v.current,
        v.baseline,
        signed(v.difference),
        v.percent
    );
}

pub fn cmd_compare(history: &History, config: &AnalysisConfig, json: bool) -> Result<()> {
    let comparison = compare_performance(history, config.baseline_periods);

    if json {
        return print_json(&comparison);
    }

    let Some(cmp) = comparison else {
        println!("Track at least two budget periods to compare performance.");
        return Ok(());
    };

    println!();
    println!("📊 Performance vs Recent Average");
    println!(
        "   Period: {}  Baseline: {}",
        cmp.period_id,
        cmp.baseline_period_ids.join(", ")
    );
    println!("   ─────────────────────────────────────────────────────────────────");
    println!(
        "   {:12} {:>12} │ {:>12} │ {:>12} │ {:>8}",
        "", "Current", "Baseline", "Change", "%"
    );
    print_variance("Income", &cmp.income);
    print_variance("Expenses", &cmp.expenses);
    println!();
    println!(
        "   Savings rate: {:.1}% (baseline {:.1}%, {} pts)",
        cmp.savings_rate.current,
        cmp.savings_rate.baseline,
        signed(cmp.savings_rate.delta)
    );

    Ok(())
}
