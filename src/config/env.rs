//! Environment file handling

use crate::error::{AppError, Result};

/// Environment variable names recognized by the harness
pub const ENV_VARS: &[&str] = &[
    "TARGET_ADDRESS",
    "CLIENT_COUNT",
    "CONNECT_TIMEOUT_SECS",
    "MIN_WAIT_MS",
    "MAX_WAIT_MS",
    "ENABLE_COLOR",
];

/// Loads and validates `.env` configuration
pub struct EnvManager;

impl EnvManager {
    /// Load the `.env` file from the working directory if present.
    /// A missing file is not an error; a malformed one is.
    pub fn load_env_file(debug: bool) -> Result<()> {
        match dotenv::dotenv() {
            Ok(path) => {
                if debug {
                    println!("Loaded environment from {}", path.display());
                }
                Ok(())
            }
            Err(dotenv::Error::Io(_)) => Ok(()),
            Err(e) => Err(AppError::config(format!("Failed to load .env file: {}", e))),
        }
    }

    /// Validate a single environment variable value before it is merged
    pub fn validate_env_var(name: &str, value: &str) -> Result<()> {
        match name {
            "TARGET_ADDRESS" => {
                if value.trim().is_empty() {
                    return Err(AppError::validation("TARGET_ADDRESS cannot be empty"));
                }
            }
            "CLIENT_COUNT" => {
                let count: u32 = value.parse().map_err(|_| {
                    AppError::validation(format!("CLIENT_COUNT must be an integer, got '{}'", value))
                })?;
                if count == 0 || count > 10_000 {
                    return Err(AppError::validation("CLIENT_COUNT must be in 1-10000"));
                }
            }
            "CONNECT_TIMEOUT_SECS" => {
                let secs: u64 = value.parse().map_err(|_| {
                    AppError::validation(format!(
                        "CONNECT_TIMEOUT_SECS must be an integer, got '{}'",
                        value
                    ))
                })?;
                if secs == 0 || secs > 300 {
                    return Err(AppError::validation("CONNECT_TIMEOUT_SECS must be in 1-300"));
                }
            }
            "MIN_WAIT_MS" | "MAX_WAIT_MS" => {
                value.parse::<u64>().map_err(|_| {
                    AppError::validation(format!("{} must be an integer, got '{}'", name, value))
                })?;
            }
            "ENABLE_COLOR" => {
                value.parse::<bool>().map_err(|_| {
                    AppError::validation(format!(
                        "ENABLE_COLOR must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Read one recognized environment variable, validating its value
    /// before it is handed to the configuration merge
    pub fn validated_var(name: &str) -> Result<Option<String>> {
        match std::env::var(name) {
            Ok(value) => {
                Self::validate_env_var(name, &value)?;
                Ok(Some(value))
            }
            Err(_) => Ok(None),
        }
    }

    /// Example `.env` content, printed by `--env-example` for first-run
    /// setup
    pub fn create_example_env_content() -> String {
        [
            "# TCP Load Harness Configuration",
            "#",
            "# Target server as \"host:port\"; bare \"host\" uses port 2323",
            "TARGET_ADDRESS=localhost:2323",
            "# Concurrent simulated clients (1-10000)",
            "CLIENT_COUNT=10",
            "# Connect-plus-read bound in seconds (1-300)",
            "CONNECT_TIMEOUT_SECS=5",
            "# Inter-probe pacing interval in milliseconds",
            "MIN_WAIT_MS=1000",
            "MAX_WAIT_MS=3000",
            "# Colored terminal output",
            "ENABLE_COLOR=true",
            "",
        ]
        .join("\n")
    }
}
