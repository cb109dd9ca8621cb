//! Widget Configuration
//!
//! Tunables for the mock backend and logging.

use std::time::Duration;

use log::LevelFilter;
use thiserror::Error;

/// Artificial latency of the mock backend
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Probability that a mock request succeeds
pub const DEFAULT_SUCCESS_RATE: f64 = 0.7;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("success rate must be within [0, 1], got {0}")]
    SuccessRate(f64),
}

/// Mock backend settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockConfig {
    delay: Duration,
    success_rate: f64,
}

impl MockConfig {
    pub fn new(delay: Duration, success_rate: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&success_rate) {
            return Err(ConfigError::SuccessRate(success_rate));
        }
        Ok(Self { delay, success_rate })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            success_rate: DEFAULT_SUCCESS_RATE,
        }
    }
}

/// Console log level for the current build profile
pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MockConfig::default();
        assert_eq!(config.delay(), Duration::from_millis(1000));
        assert_eq!(config.success_rate(), 0.7);
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        assert_eq!(
            MockConfig::new(Duration::ZERO, 1.5),
            Err(ConfigError::SuccessRate(1.5))
        );
        assert!(MockConfig::new(Duration::ZERO, -0.1).is_err());
        assert!(MockConfig::new(Duration::ZERO, f64::NAN).is_err());
        assert!(MockConfig::new(Duration::ZERO, 1.0).is_ok());
    }
}
