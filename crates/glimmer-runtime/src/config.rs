//! Environment-driven runtime configuration.

use std::time::Duration;

use thiserror::Error;

/// Brightness applied when `GLIMMER_BRIGHTNESS` is unset.
pub const DEFAULT_BRIGHTNESS: f64 = 0.25;

/// Resync period applied when `GLIMMER_RESYNC_SECS` is unset.
pub const DEFAULT_RESYNC_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime parameters, read from `GLIMMER_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct GlimmerConfig {
    /// Uniform brightness for all rendered colors, clamped to `0.0..=1.0`.
    pub brightness: f64,
    /// Period of the self-healing resync sweep.
    pub resync_period: Duration,
    /// Per-subscriber event buffer capacity.
    pub channel_capacity: usize,
}

impl Default for GlimmerConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            resync_period: Duration::from_secs(DEFAULT_RESYNC_SECS),
            channel_capacity: glimmer_bus::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl GlimmerConfig {
    /// Load configuration from the environment.
    ///
    /// Unset variables fall back to defaults; set-but-unparseable values
    /// are rejected rather than silently defaulted.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            brightness: read_var("GLIMMER_BRIGHTNESS", defaults.brightness)?.clamp(0.0, 1.0),
            resync_period: Duration::from_secs(read_var(
                "GLIMMER_RESYNC_SECS",
                DEFAULT_RESYNC_SECS,
            )?),
            channel_capacity: read_var("GLIMMER_CHANNEL_CAPACITY", defaults.channel_capacity)?,
        })
    }
}

fn read_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GlimmerConfig::default();
        assert_eq!(config.brightness, DEFAULT_BRIGHTNESS);
        assert_eq!(config.resync_period, Duration::from_secs(30));
        assert_eq!(config.channel_capacity, 1000);
    }

    #[test]
    fn test_read_var_parses_and_rejects() {
        // Unique variable name: tests run in parallel in one process.
        std::env::set_var("GLIMMER_TEST_READ_VAR", "0.5");
        assert_eq!(read_var("GLIMMER_TEST_READ_VAR", 0.1_f64).unwrap(), 0.5);

        std::env::set_var("GLIMMER_TEST_READ_VAR", "bright");
        assert_eq!(
            read_var("GLIMMER_TEST_READ_VAR", 0.1_f64).unwrap_err(),
            ConfigError::Invalid {
                var: "GLIMMER_TEST_READ_VAR",
                value: "bright".to_string()
            }
        );
    }
}
