//! Data models for probe outcomes, metrics events, and configuration

pub mod config;
pub mod metrics;

pub use config::Config;
pub use metrics::{MetricsEvent, ProbeOutcome, EVENT_KIND_TCP, EVENT_NAME_CONNECT};
