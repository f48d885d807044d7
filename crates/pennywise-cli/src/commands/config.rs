//! Config-related command implementations

use std::path::Path;

use anyhow::Result;
use pennywise_core::config::default_config_path;
use pennywise_core::AnalysisConfig;

use super::print_json;

/// Show the effective config (file values merged over defaults, plus CLI overrides)
pub fn cmd_config_show(config: &AnalysisConfig, json: bool) -> Result<()> {
    if json {
        return print_json(config);
    }

    print!("{}", config.to_toml()?);
    Ok(())
}

/// Show where the config is read from
pub fn cmd_config_path(explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = explicit {
        let status = if path.exists() { "found" } else { "missing" };
        println!("{} ({})", path.display(), status);
        return Ok(());
    }

    match default_config_path() {
        Some(path) => {
            let status = if path.exists() {
                "✓ Custom"
            } else {
                "Default (built-in)"
            };
            println!("Override path: {}", path.display());
            println!("Active:        {}", status);
        }
        None => println!("Override path: (not available)"),
    }

    Ok(())
}
