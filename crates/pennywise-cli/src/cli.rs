//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pennywise - Forecast spending and plan savings goals
#[derive(Parser)]
#[command(name = "pennywise")]
#[command(about = "Budget forecasting, goal allocation and spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Budget history export (JSON). Use "-" to read from stdin.
    #[arg(long, default_value = "history.json", global = true)]
    pub history: PathBuf,

    /// Analysis config file (defaults to the data dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How expense categories are linked across periods: name, id
    ///
    /// Overrides `[matching] categories` from the config file.
    #[arg(long, global = true)]
    pub match_by: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show totals for a budget period
    Totals {
        /// Period id (defaults to the latest period)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Forecast next-period spending, income and money left to spend
    Forecast {
        /// Number of categories in the ranked list (defaults to config)
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Simulate how a surplus would fund savings goals
    Simulate {
        /// Percent change applied to income (e.g. 10 or -5)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        income_adjust: f64,

        /// Percent change applied to spending (e.g. -10)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        expense_adjust: f64,

        /// Goal id to prioritize (repeatable)
        #[arg(short, long = "priority")]
        priority: Vec<String>,

        /// Date projections start from (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Show spending insights for the latest period
    Insights,

    /// Compare the latest period with the average of recent periods
    Compare,

    /// Full analysis report (totals, forecast, simulation, insights, comparison)
    Report {
        /// Goal id to prioritize in the simulation (repeatable)
        #[arg(short, long = "priority")]
        priority: Vec<String>,

        /// Date projections start from (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Export per-period totals as CSV for charting
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Inspect the analysis config
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective config
    Show,

    /// Show the path where a config override should be placed
    Path,
}
