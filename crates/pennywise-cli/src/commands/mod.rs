//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `setup` - Shared utilities (open_history, load_config, resolve_today)
//! - `totals` - Period totals
//! - `forecast` - Next-period forecasts
//! - `simulate` - Goal allocation scenarios
//! - `insights` - Spending insights and performance comparison
//! - `report` - Full report and CSV export
//! - `config` - Config inspection

pub mod config;
pub mod forecast;
pub mod insights;
pub mod report;
pub mod setup;
pub mod simulate;
pub mod totals;

// Re-export command functions for main.rs
pub use config::*;
pub use forecast::*;
pub use insights::*;
pub use report::*;
pub use setup::*;
pub use simulate::*;
pub use totals::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount with a sign, e.g. `+12.50` or `-3.00`
pub fn signed(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+{:.2}", amount)
    } else {
        format!("{:.2}", amount)
    }
}
