//! Pennywise CLI - Budget forecasting and goal planning
//!
//! Usage:
//!   pennywise --history history.json totals          Totals for the latest period
//!   pennywise forecast --top 5                        Next-period forecast
//!   pennywise simulate --income-adjust 10 -p car      What-if goal allocation
//!   pennywise report --json                           Everything, as one JSON document

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output stays pipeable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    // Config is loaded per command so `config path` still works with a broken override
    let load_config = || commands::load_config(cli.config.as_deref(), cli.match_by.as_deref());

    match cli.command {
        Commands::Totals { period } => {
            let history = commands::open_history(&cli.history)?;
            commands::cmd_totals(&history, period.as_deref(), cli.json)
        }
        Commands::Forecast { top } => {
            let history = commands::open_history(&cli.history)?;
            commands::cmd_forecast(&history, &load_config()?, top, cli.json)
        }
        Commands::Simulate {
            income_adjust,
            expense_adjust,
            priority,
            today,
        } => {
            let history = commands::open_history(&cli.history)?;
            let today = commands::resolve_today(today.as_deref())?;
            let params = commands::simulation_params(income_adjust, expense_adjust, priority);
            commands::cmd_simulate(&history, &params, today, cli.json)
        }
        Commands::Insights => {
            let history = commands::open_history(&cli.history)?;
            commands::cmd_insights(&history, &load_config()?, cli.json)
        }
        Commands::Compare => {
            let history = commands::open_history(&cli.history)?;
            commands::cmd_compare(&history, &load_config()?, cli.json)
        }
        Commands::Report { priority, today } => {
            let history = commands::open_history(&cli.history)?;
            let today = commands::resolve_today(today.as_deref())?;
            let params = commands::simulation_params(0.0, 0.0, priority);
            commands::cmd_report(&history, &load_config()?, &params, today, cli.json)
        }
        Commands::Export { output } => {
            let history = commands::open_history(&cli.history)?;
            commands::cmd_export(&history, &output)
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(&load_config()?, cli.json),
            Some(ConfigAction::Path) => commands::cmd_config_path(cli.config.as_deref()),
        },
    }
}
