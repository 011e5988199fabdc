//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Failure classification for a single probe attempt.
///
/// Probe failures are ordinary data carried inside a
/// [`ProbeOutcome`](crate::models::ProbeOutcome), never a thrown error:
/// the simulated-client loop reports them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeError {
    /// No connection/response completed within the configured bound
    Timeout,
    /// Socket-level failure: refused, reset, unreachable, or payload
    /// decode failure
    Connection(String),
}

impl ProbeError {
    /// Get a short classification label for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            ProbeError::Timeout => "TIMEOUT",
            ProbeError::Connection(_) => "CONNECTION",
        }
    }
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Timeout => write!(f, "timed out"),
            ProbeError::Connection(detail) => write!(f, "connection error: {}", detail),
        }
    }
}

/// A probed host:port pair, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    /// Parse a "host:port" address, splitting on the last colon.
    ///
    /// A bare "host" uses `default_port`. The port must parse as a
    /// non-zero u16, so `"10.0.0.1:99999"` and `"host:0"` both fail
    /// configuration validation.
    pub fn parse(address: &str, default_port: u16) -> Result<Self> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AppError::config("Target address cannot be empty"));
        }

        let (host, port) = match address.rsplit_once(':') {
            Some((host, port_str)) => {
                let port: u16 = port_str.parse().map_err(|e| {
                    AppError::config(format!(
                        "Invalid port '{}' in target address '{}': {}",
                        port_str, address, e
                    ))
                })?;
                (host, port)
            }
            None => (address, default_port),
        };

        if host.is_empty() {
            return Err(AppError::config(format!(
                "Target address '{}' has no host",
                address
            )));
        }
        if port == 0 {
            return Err(AppError::config(format!(
                "Target address '{}' has port 0; ports must be in 1-65535",
                address
            )));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_host_and_port() {
        let target = Target::parse("localhost:2323", 9999).unwrap();
        assert_eq!(target.host, "localhost");
        assert_eq!(target.port, 2323);
    }

    #[test]
    fn test_parse_bare_host_uses_default_port() {
        let target = Target::parse("localhost", 2323).unwrap();
        assert_eq!(target.host, "localhost");
        assert_eq!(target.port, 2323);
    }

    #[test]
    fn test_parse_splits_on_last_colon() {
        let target = Target::parse("svc.internal:node:8080", 2323).unwrap();
        assert_eq!(target.host, "svc.internal:node");
        assert_eq!(target.port, 8080);
    }

    #[test]
    fn test_parse_rejects_out_of_range_port() {
        assert!(Target::parse("10.0.0.1:99999", 2323).is_err());
    }

    #[test]
    fn test_parse_rejects_port_zero() {
        assert!(Target::parse("localhost:0", 2323).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_port() {
        assert!(Target::parse("localhost:abc", 2323).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_address() {
        assert!(Target::parse("", 2323).is_err());
        assert!(Target::parse("   ", 2323).is_err());
        assert!(Target::parse(":8080", 2323).is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let target = Target::parse("example.com:1234", 2323).unwrap();
        assert_eq!(target.to_string(), "example.com:1234");
    }

    #[test]
    fn test_probe_error_categories() {
        assert_eq!(ProbeError::Timeout.category(), "TIMEOUT");
        assert_eq!(
            ProbeError::Connection("refused".to_string()).category(),
            "CONNECTION"
        );
    }

    proptest! {
        #[test]
        fn prop_valid_host_port_pairs_parse(
            host in "[a-z][a-z0-9.-]{0,40}",
            port in 1u16..=65535,
        ) {
            let address = format!("{}:{}", host, port);
            let target = Target::parse(&address, 2323).unwrap();
            prop_assert_eq!(target.host, host);
            prop_assert_eq!(target.port, port);
        }

        #[test]
        fn prop_bare_host_takes_default(host in "[a-z][a-z0-9.-]{0,40}") {
            let target = Target::parse(&host, 4242).unwrap();
            prop_assert_eq!(target.host, host);
            prop_assert_eq!(target.port, 4242);
        }
    }
}
