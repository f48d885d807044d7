//! Export functionality for per-period series
//!
//! Writes one CSV row per period with its totals, oldest first. This is the
//! feed charting front-ends plot trends from.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::history::History;
use crate::report::Report;
use crate::totals::compute_totals;

/// Column headers of the series CSV, in order
pub const SERIES_COLUMNS: [&str; 12] = [
    "period_id",
    "label",
    "created",
    "income",
    "expenses",
    "bills",
    "debts",
    "savings",
    "investments",
    "total_out",
    "left_to_spend",
    "available_to_budget",
];

/// One exported row; amounts are pre-rounded to cents
#[derive(Debug, Serialize)]
struct SeriesRow {
    period_id: String,
    label: String,
    created: String,
    income: String,
    expenses: String,
    bills: String,
    debts: String,
    savings: String,
    investments: String,
    total_out: String,
    left_to_spend: String,
    available_to_budget: String,
}

fn cents(amount: f64) -> String {
    format!("{:.2}", amount)
}

fn write_series<W: std::io::Write>(history: &History, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    if history.is_empty() {
        csv.write_record(SERIES_COLUMNS)?;
    }

    for period in history.periods() {
        let t = compute_totals(period);
        csv.serialize(SeriesRow {
            period_id: period.id.clone(),
            label: period.label(),
            created: period.created.to_rfc3339(),
            income: cents(t.total_income),
            expenses: cents(t.total_expenses),
            bills: cents(t.total_bills),
            debts: cents(t.total_debts),
            savings: cents(t.total_savings),
            investments: cents(t.total_investments),
            total_out: cents(t.total_out),
            left_to_spend: cents(t.left_to_spend),
            available_to_budget: cents(t.available_to_budget),
        })?;
    }

    csv.flush()?;
    Ok(())
}

/// Render the series CSV as a string
pub fn series_csv(history: &History) -> Result<String> {
    let mut buffer = Vec::new();
    write_series(history, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| crate::error::Error::InvalidData(format!("Non UTF-8 CSV output: {}", e)))
}

/// Write the series CSV to `path`, returning the number of rows written
pub fn write_series_csv(history: &History, path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    write_series(history, file)?;

    tracing::info!(
        path = %path.display(),
        rows = history.len(),
        "Exported period series"
    );
    Ok(history.len())
}

/// Serialize a full analysis report as pretty JSON
pub fn report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
