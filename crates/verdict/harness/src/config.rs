//! Harness configuration.

use crate::error::{HarnessError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Overrides whether mismatches are attributed to the last recorded outcome.
pub const ENV_PREFER_ORIGINAL_LOCATION: &str = "VERDICT_PREFER_ORIGINAL_LOCATION";
/// Overrides the main-context deferral delay, in milliseconds.
pub const ENV_DEFER_DELAY_MS: &str = "VERDICT_DEFER_DELAY_MS";
/// Fallback log filter when `RUST_LOG` is unset.
pub const ENV_LOG: &str = "VERDICT_LOG";

/// Configuration shared by a [`Harness`](crate::Harness) and its helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Attribute mismatches to the last recorded outcome instead of the
    /// reconciler's call site.
    pub prefer_original_source_location: bool,
    /// Delay before a deferred action runs on the main context.
    pub defer_delay_ms: u64,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            prefer_original_source_location: false,
            defer_delay_ms: 10,
            log_level: "warn".to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn with_prefer_original_source_location(mut self, prefer: bool) -> Self {
        self.prefer_original_source_location = prefer;
        self
    }

    pub fn with_defer_delay(mut self, delay: Duration) -> Self {
        self.defer_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn defer_delay(&self) -> Duration {
        Duration::from_millis(self.defer_delay_ms)
    }

    /// Defaults overridden by `VERDICT_*` environment variables.
    pub fn from_env() -> HarnessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// `VERDICT_*` key.
    pub fn from_lookup<F>(lookup: F) -> HarnessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PREFER_ORIGINAL_LOCATION) {
            config.prefer_original_source_location =
                parse_flag(ENV_PREFER_ORIGINAL_LOCATION, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DEFER_DELAY_MS) {
            config.defer_delay_ms = raw.trim().parse().map_err(|_| {
                HarnessError::Configuration(format!(
                    "{}={} is not a millisecond count",
                    ENV_DEFER_DELAY_MS, raw
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_LOG) {
            config.log_level = raw;
        }

        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> HarnessResult<Self> {
        serde_json::from_str(json).map_err(|e| HarnessError::Configuration(e.to_string()))
    }
}

fn parse_flag(key: &str, raw: &str) -> HarnessResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(HarnessError::Configuration(format!(
            "{}={} is not a boolean",
            key, raw
        ))),
    }
}
