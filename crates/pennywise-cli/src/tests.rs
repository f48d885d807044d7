//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use chrono::NaiveDate;
use pennywise_core::test_utils::{completed_goal, goal, PeriodBuilder};
use pennywise_core::{AnalysisConfig, CategoryMatch, History};

use crate::commands::{self, signed, truncate};

fn sample_history() -> History {
    History::new(vec![
        PeriodBuilder::new("2026-08", 2026, 8)
            .income("Salary", 3500.0, 3500.0)
            .expense("Groceries", 500.0, 480.0)
            .expense("Dining", 200.0, 150.0)
            .bill("Rent", 1300.0, true)
            .build(),
        PeriodBuilder::new("2026-09", 2026, 9)
            .income("Salary", 3500.0, 3500.0)
            .expense("Groceries", 500.0, 520.0)
            .expense("Dining", 200.0, 260.0)
            .bill("Rent", 1300.0, true)
            .savings("Emergency", 200.0)
            .goal(goal("car", 6000.0, 1000.0, 150.0))
            .goal(goal("trip", 2000.0, 400.0, 100.0))
            .goal(completed_goal("laptop", 1500.0))
            .build(),
    ])
}

fn write_history_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("history.json");
    let periods = sample_history().periods().to_vec();
    let json = serde_json::to_string(&periods).unwrap();
    std::fs::write(&path, json).unwrap();
    path
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("Groceries", 20), "Groceries");
    assert_eq!(truncate("Household supplies and repairs", 12), "Household...");
    assert_eq!(truncate("Café crème", 6), "Caf...");
}

#[test]
fn test_signed() {
    assert_eq!(signed(12.5), "+12.50");
    assert_eq!(signed(-3.0), "-3.00");
    assert_eq!(signed(0.0), "+0.00");
}

// ========== Setup Tests ==========

#[test]
fn test_open_history_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_history_file(&dir);

    let history = commands::open_history(&path).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.latest().unwrap().id, "2026-09");
}

#[test]
fn test_open_history_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = commands::open_history(&dir.path().join("nope.json"));
    assert!(result.is_err());
}

#[test]
fn test_open_history_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let result = commands::open_history(file.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to load history"));
}

#[test]
fn test_load_config_match_by_override() {
    let config = commands::load_config(None, Some("id")).unwrap();
    assert_eq!(config.category_match, CategoryMatch::Id);
}

#[test]
fn test_load_config_invalid_match_by() {
    let result = commands::load_config(None, Some("color"));
    assert!(result.is_err());
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[comparison]\nbaseline_periods = 2").unwrap();

    let config = commands::load_config(Some(file.path()), None).unwrap();
    assert_eq!(config.baseline_periods, 2);
}

#[test]
fn test_resolve_today() {
    assert_eq!(
        commands::resolve_today(Some("2026-10-18")).unwrap(),
        today()
    );
    assert!(commands::resolve_today(Some("18/10/2026")).is_err());
    assert!(commands::resolve_today(None).is_ok());
}

#[test]
fn test_simulation_params() {
    let params = commands::simulation_params(10.0, -5.0, vec!["car".to_string()]);
    assert_eq!(params.income_adjustment_pct, 10.0);
    assert_eq!(params.expense_adjustment_pct, -5.0);
    assert!(params.priority_goal_ids.contains("car"));
}

// ========== Command Tests ==========

#[test]
fn test_cmd_totals() {
    let history = sample_history();
    assert!(commands::cmd_totals(&history, None, false).is_ok());
    assert!(commands::cmd_totals(&history, Some("2026-08"), true).is_ok());
}

#[test]
fn test_cmd_totals_unknown_period() {
    let result = commands::cmd_totals(&sample_history(), Some("1999-01"), false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn test_cmd_totals_empty_history() {
    assert!(commands::cmd_totals(&History::default(), None, false).is_ok());
}

#[test]
fn test_cmd_forecast() {
    let history = sample_history();
    let config = AnalysisConfig::default();
    assert!(commands::cmd_forecast(&history, &config, None, false).is_ok());
    assert!(commands::cmd_forecast(&history, &config, Some(1), true).is_ok());
    assert!(commands::cmd_forecast(&History::default(), &config, None, false).is_ok());
}

#[test]
fn test_cmd_simulate() {
    let history = sample_history();
    let params = commands::simulation_params(5.0, -10.0, vec!["car".to_string()]);
    assert!(commands::cmd_simulate(&history, &params, today(), false).is_ok());
    assert!(commands::cmd_simulate(&history, &params, today(), true).is_ok());
}

#[test]
fn test_cmd_simulate_unknown_priority_goal() {
    let params = commands::simulation_params(0.0, 0.0, vec!["boat".to_string()]);
    assert!(commands::cmd_simulate(&sample_history(), &params, today(), false).is_ok());
}

#[test]
fn test_cmd_insights_and_compare() {
    let history = sample_history();
    let config = AnalysisConfig::default();
    assert!(commands::cmd_insights(&history, &config, false).is_ok());
    assert!(commands::cmd_insights(&history, &config, true).is_ok());
    assert!(commands::cmd_compare(&history, &config, false).is_ok());
    assert!(commands::cmd_compare(&History::default(), &config, false).is_ok());
}

#[test]
fn test_cmd_report() {
    let history = sample_history();
    let config = AnalysisConfig::default();
    let params = commands::simulation_params(0.0, 0.0, vec![]);
    assert!(commands::cmd_report(&history, &config, &params, today(), false).is_ok());
    assert!(commands::cmd_report(&history, &config, &params, today(), true).is_ok());
}

#[test]
fn test_cmd_export() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("series.csv");

    let result = commands::cmd_export(&sample_history(), &output);
    assert!(result.is_ok());

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.lines().nth(1).unwrap().starts_with("2026-08,"));
}

#[test]
fn test_cmd_config_path_with_broken_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[insights\nmax_insights = ").unwrap();

    assert!(commands::load_config(Some(file.path()), None).is_err());
    assert!(commands::cmd_config_path(Some(file.path())).is_ok());
}

#[test]
fn test_cmd_config() {
    let config = AnalysisConfig::default();
    assert!(commands::cmd_config_show(&config, false).is_ok());
    assert!(commands::cmd_config_show(&config, true).is_ok());
    assert!(commands::cmd_config_path(None).is_ok());
}
