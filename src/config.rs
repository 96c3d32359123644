//! Runtime configuration for the CLI and the forecast service.

use crate::error::{ForecastError, Result};
use std::env;
use std::str::FromStr;

/// Upper bound on forecast steps accepted from users.
pub const MAX_HORIZON: usize = 120;

pub const DEFAULT_HORIZON: usize = 3;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    pub host: String,
    pub port: u16,
    /// Forecast steps used when a request does not name one.
    pub horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl ForecastConfig {
    /// Load from `HOST`, `PORT` and `FORECAST_HORIZON`, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_var("PORT", &port)?;
        }
        if let Some(horizon) = lookup("FORECAST_HORIZON") {
            config.horizon = parse_var("FORECAST_HORIZON", &horizon)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_horizon(self.horizon)
    }
}

/// Reject horizons outside `1..=MAX_HORIZON`.
pub fn validate_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 || horizon > MAX_HORIZON {
        return Err(ForecastError::InvalidParameter(format!(
            "horizon must be between 1 and {MAX_HORIZON}, got {horizon}"
        )));
    }
    Ok(())
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        ForecastError::InvalidParameter(format!("{name} has invalid value {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ForecastConfig::from_vars(lookup(&[])).unwrap();
        assert_eq!(config, ForecastConfig::default());
        assert_eq!(config.port, 5001);
        assert_eq!(config.horizon, 3);
    }

    #[test]
    fn reads_overrides() {
        let config = ForecastConfig::from_vars(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("FORECAST_HORIZON", " 6 "),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.horizon, 6);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let result = ForecastConfig::from_vars(lookup(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));

        let result = ForecastConfig::from_vars(lookup(&[("FORECAST_HORIZON", "-1")]));
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }

    #[test]
    fn horizon_bounds() {
        assert!(validate_horizon(1).is_ok());
        assert!(validate_horizon(MAX_HORIZON).is_ok());
        assert!(validate_horizon(0).is_err());
        assert!(validate_horizon(MAX_HORIZON + 1).is_err());

        let config = ForecastConfig {
            horizon: 0,
            ..ForecastConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
