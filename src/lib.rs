//! TCP Load Harness
//!
//! A synthetic-load harness that opens many concurrent TCP connections
//! against a target server, measures per-connection latency and payload
//! size, classifies failures, and emits one metrics event per probe.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod probe;
pub mod scheduler;
pub mod sink;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, MetricsEvent, ProbeOutcome};
pub use probe::ConnectionProbe;
pub use scheduler::{LifecycleHooks, PrintHooks, ProbeScheduler};
pub use sink::{EventSink, LoggingSink, MemorySink};
pub use types::{ProbeError, Target};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    /// Port assumed when the target address carries no ":port" suffix
    pub const DEFAULT_PORT: u16 = 2323;
    /// Maximum bytes read from the peer in a single receive
    pub const READ_LIMIT: usize = 256;
    /// Bound covering both connection establishment and the response read
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    /// Inter-probe pacing interval per simulated client
    pub const DEFAULT_MIN_WAIT: Duration = Duration::from_millis(1000);
    pub const DEFAULT_MAX_WAIT: Duration = Duration::from_millis(3000);
    /// Number of concurrent simulated clients
    pub const DEFAULT_CLIENT_COUNT: u32 = 10;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
