//! Configuration data model and validation

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target address as "host:port" or bare "host"
    #[serde(default = "default_target_address")]
    pub target_address: String,

    /// Number of concurrent simulated clients
    #[serde(default = "default_client_count")]
    pub client_count: u32,

    /// Bound covering connect plus read, in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Minimum inter-probe pacing delay, in milliseconds
    #[serde(default = "default_min_wait_ms")]
    pub min_wait_ms: u64,

    /// Maximum inter-probe pacing delay, in milliseconds
    #[serde(default = "default_max_wait_ms")]
    pub max_wait_ms: u64,

    /// Stop the harness after this many seconds (run until Ctrl-C if absent)
    #[serde(default)]
    pub run_time_secs: Option<u64>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_address: default_target_address(),
            client_count: default_client_count(),
            connect_timeout_secs: default_connect_timeout_secs(),
            min_wait_ms: default_min_wait_ms(),
            max_wait_ms: default_max_wait_ms(),
            run_time_secs: None,
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Get minimum pacing delay as Duration
    pub fn min_wait(&self) -> Duration {
        Duration::from_millis(self.min_wait_ms)
    }

    /// Get maximum pacing delay as Duration
    pub fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.target_address.trim().is_empty() {
            return Err(AppError::config("Target address cannot be empty"));
        }

        if self.client_count == 0 {
            return Err(AppError::config("Client count must be greater than 0"));
        }

        if self.client_count > 10_000 {
            return Err(AppError::config("Client count cannot exceed 10000"));
        }

        if self.connect_timeout_secs == 0 {
            return Err(AppError::config("Connect timeout must be greater than 0"));
        }

        if self.connect_timeout_secs > 300 {
            return Err(AppError::config("Connect timeout cannot exceed 300 seconds"));
        }

        if self.min_wait_ms > self.max_wait_ms {
            return Err(AppError::config(format!(
                "Minimum wait ({}ms) cannot exceed maximum wait ({}ms)",
                self.min_wait_ms, self.max_wait_ms
            )));
        }

        if let Some(run_time) = self.run_time_secs {
            if run_time == 0 {
                return Err(AppError::config("Run time must be greater than 0"));
            }
        }

        Ok(())
    }

    /// Merge environment variables into this configuration.
    ///
    /// Each variable is validated by
    /// [`EnvManager`](crate::config::EnvManager) before it is applied, so
    /// an out-of-range value fails here rather than surviving until
    /// `validate()`.
    pub fn merge_from_env(&mut self) -> Result<()> {
        use crate::config::env::EnvManager;

        if let Some(address) = EnvManager::validated_var("TARGET_ADDRESS")? {
            self.target_address = address.trim().to_string();
        }

        if let Some(clients) = EnvManager::validated_var("CLIENT_COUNT")? {
            self.client_count = clients.parse().map_err(|e| {
                AppError::config(format!("Invalid CLIENT_COUNT value '{}': {}", clients, e))
            })?;
        }

        if let Some(timeout) = EnvManager::validated_var("CONNECT_TIMEOUT_SECS")? {
            self.connect_timeout_secs = timeout.parse().map_err(|e| {
                AppError::config(format!(
                    "Invalid CONNECT_TIMEOUT_SECS value '{}': {}",
                    timeout, e
                ))
            })?;
        }

        if let Some(min_wait) = EnvManager::validated_var("MIN_WAIT_MS")? {
            self.min_wait_ms = min_wait.parse().map_err(|e| {
                AppError::config(format!("Invalid MIN_WAIT_MS value '{}': {}", min_wait, e))
            })?;
        }

        if let Some(max_wait) = EnvManager::validated_var("MAX_WAIT_MS")? {
            self.max_wait_ms = max_wait.parse().map_err(|e| {
                AppError::config(format!("Invalid MAX_WAIT_MS value '{}': {}", max_wait, e))
            })?;
        }

        if let Some(enable_color) = EnvManager::validated_var("ENABLE_COLOR")? {
            self.enable_color = enable_color.parse().map_err(|e| {
                AppError::config(format!(
                    "Invalid ENABLE_COLOR value '{}': {}",
                    enable_color, e
                ))
            })?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_target_address() -> String {
    format!("localhost:{}", crate::defaults::DEFAULT_PORT)
}

fn default_client_count() -> u32 {
    crate::defaults::DEFAULT_CLIENT_COUNT
}

fn default_connect_timeout_secs() -> u64 {
    crate::defaults::DEFAULT_CONNECT_TIMEOUT.as_secs()
}

fn default_min_wait_ms() -> u64 {
    crate::defaults::DEFAULT_MIN_WAIT.as_millis() as u64
}

fn default_max_wait_ms() -> u64 {
    crate::defaults::DEFAULT_MAX_WAIT.as_millis() as u64
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
