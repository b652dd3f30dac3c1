use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_ALTITUDE, MIN_ALTITUDE};

/// Upper bound on the number of altitudes a single sweep may visit.
pub const MAX_SAMPLES: usize = 2_000_000;

/// Relative slack when deciding whether `end` lies on the `step` grid.
const GRID_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read profile configuration '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error deserializing profile configuration")]
    Deserialize(#[from] toml::de::Error),

    #[error("Invalid profile configuration: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Profile sweep configuration
// ---------------------------------------------------------------------------

/// Altitudes to tabulate: `start, start + step, ...` up to and including `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    pub start: f64, // m
    pub end: f64,   // m
    pub step: f64,  // m
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            start: MIN_ALTITUDE,
            end: MAX_ALTITUDE,
            step: 1_000.0,
        }
    }
}

impl ProfileConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: ProfileConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading profile configuration from '{}'", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if ![self.start, self.end, self.step].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid("values must be finite".into()));
        }
        if self.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.start > self.end {
            return Err(ConfigError::Invalid(format!(
                "start {} is above end {}",
                self.start, self.end
            )));
        }
        let range = MIN_ALTITUDE..=MAX_ALTITUDE;
        if !range.contains(&self.start) || !range.contains(&self.end) {
            return Err(ConfigError::Invalid(format!(
                "altitudes must lie within [{MIN_ALTITUDE}; {MAX_ALTITUDE}] m"
            )));
        }
        let steps = self.whole_steps();
        if steps >= MAX_SAMPLES as f64 {
            return Err(ConfigError::Invalid(format!(
                "step {} m yields {} altitudes, at most {MAX_SAMPLES} allowed",
                self.step,
                steps + 1.0
            )));
        }
        Ok(())
    }

    /// Whole steps from `start` to `end`. An `end` within rounding of the grid counts as on it.
    fn whole_steps(&self) -> f64 {
        let steps = (self.end - self.start) / self.step;
        (steps + GRID_TOLERANCE * steps.max(1.0)).floor()
    }

    /// Number of altitudes the sweep visits. Only meaningful for a validated config.
    pub fn sample_count(&self) -> usize {
        self.whole_steps() as usize + 1
    }

    pub fn altitudes(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).map(move |i| (self.start + i as f64 * self.step).min(self.end))
    }
}
