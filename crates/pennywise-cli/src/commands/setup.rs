//! Shared command utilities
//!
//! This module contains:
//! - `open_history` - Load the budget history from a file or stdin
//! - `load_config` - Resolve the analysis config and apply CLI overrides
//! - `resolve_today` - Parse `--today` or fall back to the local date
//! - `simulation_params` - Build scenario inputs from CLI flags
//! - `print_json` - Pretty JSON output for `--json`

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use pennywise_core::{AnalysisConfig, CategoryMatch, History, SimulationParams};
use serde::Serialize;

/// Load history from `path`, or from stdin when `path` is "-"
pub fn open_history(path: &Path) -> Result<History> {
    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        let history =
            History::from_reader(stdin.lock()).context("Failed to parse history from stdin")?;
        tracing::info!(periods = history.len(), "Loaded budget history from stdin");
        return Ok(history);
    }

    History::load(path).with_context(|| format!("Failed to load history from {}", path.display()))
}

/// Load the analysis config, letting `--match-by` override the config file
pub fn load_config(path: Option<&Path>, match_by: Option<&str>) -> Result<AnalysisConfig> {
    let mut config = AnalysisConfig::load(path).context("Failed to load analysis config")?;

    if let Some(strategy) = match_by {
        config.category_match = strategy
            .parse::<CategoryMatch>()
            .map_err(|e: String| anyhow::anyhow!(e))?;
    }

    Ok(config)
}

/// Parse a YYYY-MM-DD date, defaulting to the local date
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --today date format (use YYYY-MM-DD)"),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn simulation_params(
    income_adjust: f64,
    expense_adjust: f64,
    priority: Vec<String>,
) -> SimulationParams {
    SimulationParams {
        income_adjustment_pct: income_adjust,
        expense_adjustment_pct: expense_adjust,
        ..SimulationParams::default()
    }
    .with_priority(priority)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
