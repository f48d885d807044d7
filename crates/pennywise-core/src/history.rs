//! Budget history
//!
//! Wraps the periods handed over by the history store. Periods are sorted by
//! creation time on construction so every series read from a [`History`] is
//! oldest first.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::models::{BudgetPeriod, CategoryMatch};
use crate::totals::{compute_totals, Metric, Totals};

/// Chronologically ordered budget periods
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    periods: Vec<BudgetPeriod>,
}

impl History {
    /// Build a history, sorting by `created` ascending.
    ///
    /// The sort is stable: periods with equal timestamps keep input order.
    pub fn new(mut periods: Vec<BudgetPeriod>) -> Self {
        periods.sort_by_key(|p| p.created);
        Self { periods }
    }

    /// Parse a bare array of periods or an object with a `periods` key
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    fn from_value(value: Value) -> Result<Self> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(mut map) => match map.remove("periods") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return Err(Error::InvalidData(
                        "expected a `periods` array in history object".to_string(),
                    ))
                }
            },
            _ => {
                return Err(Error::InvalidData(
                    "expected an array of periods or an object with a `periods` key".to_string(),
                ))
            }
        };

        let periods = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| decode_period(index, entry))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(periods))
    }

    /// Load a history export from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "history file {}",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let history = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            periods = history.len(),
            "Loaded budget history"
        );
        Ok(history)
    }

    pub fn periods(&self) -> &[BudgetPeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Most recent period
    pub fn latest(&self) -> Option<&BudgetPeriod> {
        self.periods.last()
    }

    /// Period immediately before the latest
    pub fn previous(&self) -> Option<&BudgetPeriod> {
        self.periods.len().checked_sub(2).map(|i| &self.periods[i])
    }

    pub fn find(&self, id: &str) -> Option<&BudgetPeriod> {
        self.periods.iter().find(|p| p.id == id)
    }

    /// Totals for every period, oldest first
    pub fn totals(&self) -> Vec<Totals> {
        self.periods.iter().map(compute_totals).collect()
    }

    /// Values of `metric` for every period, oldest first
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.periods
            .iter()
            .map(|p| metric.value(&compute_totals(p)))
            .collect()
    }

    /// Distinct category keys across all periods, in first-seen order
    pub fn category_keys(&self, strategy: CategoryMatch) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();

        for category in self.periods.iter().flat_map(|p| p.expenses.iter()) {
            let key = strategy.key_for(category);
            if seen.insert(key) {
                keys.push(key.to_string());
            }
        }

        keys
    }

    /// `spent` series for one category, 0 for periods where it is absent
    pub fn category_series(&self, key: &str, strategy: CategoryMatch) -> Vec<f64> {
        self.periods
            .iter()
            .map(|p| p.spent_in(key, strategy))
            .collect()
    }

    /// Most recent name used for a category key
    pub fn category_name(&self, key: &str, strategy: CategoryMatch) -> String {
        self.periods
            .iter()
            .rev()
            .flat_map(|p| p.expenses.iter())
            .find(|c| strategy.key_for(c) == key)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| key.to_string())
    }

    /// SHA-256 over the sorted periods, usable as a memoization key
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(&self.periods)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Decode one period, naming it in the error so a bad entry can be found
fn decode_period(index: usize, entry: Value) -> Result<BudgetPeriod> {
    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string);

    serde_json::from_value(entry).map_err(|e| {
        let which = match id {
            Some(id) => format!("period {} (id {})", index, id),
            None => format!("period {}", index),
        };
        Error::InvalidData(format!("{}: {}", which, e))
    })
}

impl From<Vec<BudgetPeriod>> for History {
    fn from(periods: Vec<BudgetPeriod>) -> Self {
        Self::new(periods)
    }
}
