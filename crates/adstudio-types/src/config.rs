//! Global configuration types for AdStudio.
//!
//! `StudioConfig` represents the top-level `config.toml` that controls the
//! mocked agent's pacing, the credit economy, and the demo sign-in pair.

use serde::{Deserialize, Serialize};

use std::time::Duration;

use crate::error::ConfigError;

/// Top-level configuration for the AdStudio dashboard.
///
/// Loaded from `~/.adstudio/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Delay before a canned agent reply appears after a user turn.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Delay before AI-suggested defaults are written into the blueprint.
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,

    /// How often the generating view rotates its loading caption.
    #[serde(default = "default_loading_rotation_ms")]
    pub loading_rotation_ms: u64,

    /// Credit balance a fresh account starts with.
    #[serde(default = "default_starting_credits")]
    pub starting_credits: u32,

    /// Credits charged per video generation.
    #[serde(default = "default_generation_cost")]
    pub generation_cost: u32,

    /// Balance at or below which a low-credit alert is raised.
    #[serde(default = "default_low_credit_threshold")]
    pub low_credit_threshold: u32,

    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_generation_delay_ms() -> u64 {
    2000
}

fn default_loading_rotation_ms() -> u64 {
    3000
}

fn default_starting_credits() -> u32 {
    145
}

fn default_generation_cost() -> u32 {
    5
}

fn default_low_credit_threshold() -> u32 {
    20
}

impl StudioConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// Never zero, even for a config that skipped `validate`.
    pub fn loading_rotation(&self) -> Duration {
        Duration::from_millis(self.loading_rotation_ms.max(1))
    }

    /// Reject values the timers cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("reply_delay_ms", self.reply_delay_ms),
            ("generation_delay_ms", self.generation_delay_ms),
            ("loading_rotation_ms", self.loading_rotation_ms),
        ];
        match periods.into_iter().find(|(_, ms)| *ms == 0) {
            Some((field, _)) => Err(ConfigError::ZeroPeriod { field }),
            None => Ok(()),
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            generation_delay_ms: default_generation_delay_ms(),
            loading_rotation_ms: default_loading_rotation_ms(),
            starting_credits: default_starting_credits(),
            generation_cost: default_generation_cost(),
            low_credit_threshold: default_low_credit_threshold(),
            auth: AuthConfig::default(),
        }
    }
}

/// The single hardcoded sign-in pair accepted by the mock login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_demo_email")]
    pub demo_email: String,
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
    #[serde(default = "default_demo_name")]
    pub demo_name: String,
}

fn default_demo_email() -> String {
    "test@gmail.com".to_string()
}

fn default_demo_password() -> String {
    "test@123".to_string()
}

fn default_demo_name() -> String {
    "John Doe".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
            demo_name: default_demo_name(),
        }
    }
}
