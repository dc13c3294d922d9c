use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tsp_core::Metric;
use tsp_held_karp::HeldKarpSolver;

use crate::{Error, Result};

/// Exhaustive search beyond this many cities takes minutes per instance.
const EXHAUSTIVE_COMFORT_LIMIT: usize = 11;

/// Settings for a randomized agreement sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub instances: usize,
    pub min_cities: usize,
    pub max_cities: usize,
    pub seed: u64,
    pub workers: usize,
    /// Coordinates are drawn uniformly from `[0, extent)`.
    pub extent: f64,
    pub metric: Metric,
    /// CSV destination; stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            instances: 50,
            min_cities: 2,
            max_cities: 9,
            seed: 42,
            workers: std::thread::available_parallelism().map_or(4, |n| n.get()),
            extent: 1000.0,
            metric: Metric::Euclidean,
            output: None,
        }
    }
}

impl SweepConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        log::debug!("loaded sweep config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_cities == 0 {
            return Err(Error::config("min_cities must be at least 1"));
        }
        if self.min_cities > self.max_cities {
            return Err(Error::config(format!(
                "min_cities ({}) exceeds max_cities ({})",
                self.min_cities, self.max_cities
            )));
        }
        if self.max_cities > HeldKarpSolver::MAX_CITIES {
            return Err(Error::config(format!(
                "max_cities ({}) exceeds the Held-Karp limit of {}",
                self.max_cities,
                HeldKarpSolver::MAX_CITIES
            )));
        }
        if self.workers == 0 {
            return Err(Error::config("workers must be at least 1"));
        }
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(Error::config(format!(
                "extent must be positive and finite, got {}",
                self.extent
            )));
        }
        if self.max_cities > EXHAUSTIVE_COMFORT_LIMIT {
            log::warn!(
                "max_cities={} makes exhaustive search very slow",
                self.max_cities
            );
        }
        Ok(())
    }
}
