// dashkit/src/config.rs
//
// Configuration sections shared by the dashboard services
//

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{DashError, DashResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Event poll timeout between redraws
    pub tick_rate_ms: u64,
    /// Lines moved per scroll key press
    pub scroll_step: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            scroll_step: 3,
        }
    }
}

impl DisplayConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.tick_rate_ms == 0 {
            return Err(DashError::ConfigError(
                "display.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        if self.scroll_step == 0 {
            return Err(DashError::ConfigError(
                "display.scroll_step must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults_are_valid() {
        let display = DisplayConfig::default();
        assert!(display.validate().is_ok());
        assert_eq!(display.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let display = DisplayConfig {
            tick_rate_ms: 0,
            ..DisplayConfig::default()
        };
        assert!(matches!(display.validate(), Err(DashError::ConfigError(_))));
    }

    #[test]
    fn test_zero_scroll_step_rejected() {
        let display = DisplayConfig {
            scroll_step: 0,
            ..DisplayConfig::default()
        };
        let err = display.validate().unwrap_err();
        assert!(err.to_string().contains("scroll_step"));
    }
}
