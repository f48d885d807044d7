//! Analysis configuration
//!
//! Thresholds for insights, the comparison baseline window, the ranked list
//! length and the category matching strategy.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/pennywise/config/analysis.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::forecast::{ForecastOptions, DEFAULT_TOP_CATEGORIES};
use crate::models::CategoryMatch;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/analysis.toml");

/// Thresholds for insight generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Percent change in total expenses that triggers an insight (exclusive)
    pub expense_trend_pct: f64,
    /// Percent change in a category that triggers an insight (exclusive)
    pub category_change_pct: f64,
    /// Minimum absolute change for a category insight (exclusive)
    pub category_noise_floor: f64,
    /// Highest-spend categories checked for changes
    pub top_categories: usize,
    /// Maximum number of insights returned
    pub max_insights: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            expense_trend_pct: 5.0,
            category_change_pct: 10.0,
            category_noise_floor: 20.0,
            top_categories: 3,
            max_insights: 5,
        }
    }
}

/// Full analysis configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Length of the ranked category forecast list
    pub forecast_top_categories: usize,
    pub insights: InsightConfig,
    /// Prior periods averaged for the performance comparison
    pub baseline_periods: usize,
    pub category_match: CategoryMatch,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            forecast_top_categories: DEFAULT_TOP_CATEGORIES,
            insights: InsightConfig::default(),
            baseline_periods: 3,
            category_match: CategoryMatch::Name,
        }
    }
}

impl AnalysisConfig {
    /// Load config, preferring `override_path`, then the data dir override,
    /// then the embedded defaults
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) if path.exists() => read_config(path)?,
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Config file not found, using defaults"
                );
                DEFAULT_CONFIG.to_string()
            }
            None => match default_config_path() {
                Some(path) if path.exists() => read_config(&path)?,
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Forecast options derived from this config
    pub fn forecast_options(&self) -> ForecastOptions {
        ForecastOptions {
            strategy: self.category_match,
            top_n: self.forecast_top_categories,
        }
    }

    /// Render as TOML in the same layout as the config file
    pub fn to_toml(&self) -> Result<String> {
        let raw = RawConfig {
            forecast: Some(RawForecast {
                top_categories: Some(self.forecast_top_categories),
            }),
            insights: Some(RawInsights {
                expense_trend_pct: Some(self.insights.expense_trend_pct),
                category_change_pct: Some(self.insights.category_change_pct),
                category_noise_floor: Some(self.insights.category_noise_floor),
                top_categories: Some(self.insights.top_categories),
                max_insights: Some(self.insights.max_insights),
            }),
            comparison: Some(RawComparison {
                baseline_periods: Some(self.baseline_periods),
            }),
            matching: Some(RawMatching {
                categories: Some(self.category_match),
            }),
        };

        toml::to_string(&raw).map_err(|e| Error::Config(format!("Failed to render config: {}", e)))
    }
}

/// Location of the user override file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("pennywise").join("config").join("analysis.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "Reading analysis config");
    fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawConfig {
    forecast: Option<RawForecast>,
    insights: Option<RawInsights>,
    comparison: Option<RawComparison>,
    matching: Option<RawMatching>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawForecast {
    top_categories: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawInsights {
    expense_trend_pct: Option<f64>,
    category_change_pct: Option<f64>,
    category_noise_floor: Option<f64>,
    top_categories: Option<usize>,
    max_insights: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawComparison {
    baseline_periods: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawMatching {
    categories: Option<CategoryMatch>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<AnalysisConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AnalysisConfig::default();

    if let Some(forecast) = raw.forecast {
        if let Some(top) = forecast.top_categories {
            config.forecast_top_categories = top;
        }
    }

    if let Some(insights) = raw.insights {
        let target = &mut config.insights;
        if let Some(v) = insights.expense_trend_pct {
            target.expense_trend_pct = v;
        }
        if let Some(v) = insights.category_change_pct {
            target.category_change_pct = v;
        }
        if let Some(v) = insights.category_noise_floor {
            target.category_noise_floor = v;
        }
        if let Some(v) = insights.top_categories {
            target.top_categories = v;
        }
        if let Some(v) = insights.max_insights {
            target.max_insights = v;
        }
    }

    if let Some(comparison) = raw.comparison {
        if let Some(periods) = comparison.baseline_periods {
            if periods == 0 {
                return Err(Error::Config(
                    "comparison.baseline_periods must be at least 1".to_string(),
                ));
            }
            config.baseline_periods = periods;
        }
    }

    if let Some(matching) = raw.matching {
        if let Some(strategy) = matching.categories {
            config.category_match = strategy;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_defaults_match_code_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [insights]
            category_noise_floor = 50.0

            [matching]
            categories = "id"
            "#,
        )
        .unwrap();

        assert_eq!(config.insights.category_noise_floor, 50.0);
        assert_eq!(config.insights.expense_trend_pct, 5.0);
        assert_eq!(config.category_match, CategoryMatch::Id);
        assert_eq!(config.forecast_options().strategy, CategoryMatch::Id);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_config("[insights\nmax = ");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_match_strategy_rejected() {
        let result = parse_config("[matching]\ncategories = \"uuid\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_baseline_rejected() {
        let result = parse_config("[comparison]\nbaseline_periods = 0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[forecast]\ntop_categories = 5").unwrap();

        let config = AnalysisConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.forecast_top_categories, 5);
    }

    #[test]
    fn test_missing_explicit_path_uses_defaults() {
        let config = AnalysisConfig::load(Some(Path::new("/no/such/analysis.toml"))).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = AnalysisConfig::default();
        config.insights.max_insights = 8;
        config.category_match = CategoryMatch::Id;

        let rendered = config.to_toml().unwrap();
        assert_eq!(parse_config(&rendered).unwrap(), config);
    }
}
