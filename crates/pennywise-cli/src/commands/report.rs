//! Report and export commands

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pennywise_core::export::{report_json, write_series_csv};
use pennywise_core::{AnalysisConfig, History, Report, SimulationParams};

use super::{cmd_compare, cmd_forecast, cmd_insights, cmd_simulate, cmd_totals};

/// Full analysis report. With `--json` this is one document; otherwise each
/// section is printed in turn.
pub fn cmd_report(
    history: &History,
    config: &AnalysisConfig,
    params: &SimulationParams,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    if json {
        let report =
            Report::build(history, config, params, today).context("Failed to build report")?;
        println!("{}", report_json(&report)?);
        return Ok(());
    }

    cmd_totals(history, None, false)?;
    cmd_forecast(history, config, None, false)?;
    cmd_simulate(history, params, today, false)?;
    cmd_insights(history, config, false)?;
    cmd_compare(history, config, false)?;

    Ok(())
}

pub fn cmd_export(history: &History, output: &Path) -> Result<()> {
    println!("📤 Exporting period series to {}...", output.display());

    let rows = write_series_csv(history, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✅ Exported {} period(s)", rows);
    Ok(())
}
