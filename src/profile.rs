use log::debug;

use crate::config::{ConfigError, ProfileConfig};
use crate::report::{self, Report};

/// Evaluate the model at every altitude of the sweep, lowest first.
pub fn profile(config: &ProfileConfig) -> Result<Vec<Report>, ConfigError> {
    config.validate()?;
    debug!(
        "Tabulating {} altitudes from {} m to {} m",
        config.sample_count(),
        config.start,
        config.end
    );
    Ok(config.altitudes().map(report::evaluate).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Quantity;

    #[test]
    fn sweep_visits_every_altitude() {
        let config = ProfileConfig {
            start: 0.0,
            end: 100_000.0,
            step: 10_000.0,
        };
        let reports = profile(&config).unwrap();
        assert_eq!(reports.len(), 11);
        assert_eq!(reports[0].altitude, 0.0);
        assert_eq!(reports[10].altitude, 100_000.0);
    }

    #[test]
    fn viscosity_disappears_past_90km() {
        let config = ProfileConfig {
            start: 80_000.0,
            end: 100_000.0,
            step: 5_000.0,
        };
        let defined: Vec<bool> = profile(&config)
            .unwrap()
            .iter()
            .map(|r| r.get(Quantity::DynamicViscosity).is_some())
            .collect();
        assert_eq!(defined, vec![true, true, true, false, false]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ProfileConfig {
            step: -1.0,
            ..ProfileConfig::default()
        };
        assert!(profile(&config).is_err());
    }

    #[test]
    fn oversized_sweep_is_rejected_before_evaluating() {
        let config = ProfileConfig {
            step: 1e-6,
            ..ProfileConfig::default()
        };
        assert!(matches!(profile(&config), Err(ConfigError::Invalid(_))));
    }
}
