//! Probe scheduling: concurrent simulated clients with randomized pacing
//!
//! The scheduler owns a pool of simulated clients. Each client repeatedly
//! runs one [`ConnectionProbe`] cycle against the shared target, forwards
//! the outcome to the event sink as a [`MetricsEvent`], then suspends for
//! a randomized pacing delay. Probe failures are reported and the loop
//! continues; only malformed configuration is fatal, and only at startup.

pub mod pacing;

pub use pacing::Pacing;

use crate::{
    defaults,
    error::Result,
    logging::LoggerHandle,
    models::{Config, MetricsEvent},
    probe::ConnectionProbe,
    sink::EventSink,
    types::Target,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Lifecycle notifications fired at harness start and stop.
///
/// These are informational only and carry no retry or error semantics.
/// The default [`PrintHooks`] writes human-readable lines; embedders
/// replace it to integrate with their own lifecycle management.
#[async_trait]
pub trait LifecycleHooks: Send + Sync {
    /// Called once before any client starts probing
    async fn on_start(&self, target_description: &str);

    /// Called once after all clients have shut down
    async fn on_stop(&self);
}

/// Default lifecycle hooks: textual start/stop notifications
pub struct PrintHooks;

#[async_trait]
impl LifecycleHooks for PrintHooks {
    async fn on_start(&self, target_description: &str) {
        println!("Load test starting against {}", target_description);
        println!("Expected server response format: IP/Port information");
    }

    async fn on_stop(&self) {
        println!("Load test completed");
    }
}

/// Drives N concurrent simulated clients against one shared target
pub struct ProbeScheduler {
    target: Target,
    client_count: u32,
    probe: ConnectionProbe,
    pacing: Pacing,
    sink: Arc<dyn EventSink>,
    logger: LoggerHandle,
    hooks: Box<dyn LifecycleHooks>,
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl ProbeScheduler {
    /// Build a scheduler from the harness configuration.
    ///
    /// Parses the target address, splitting "host:port" on the last
    /// colon and falling back to the default port for a bare host. A
    /// malformed address or port is fatal here, before any client runs.
    pub fn new(config: &Config, sink: Arc<dyn EventSink>, logger: LoggerHandle) -> Result<Self> {
        let target = Target::parse(&config.target_address, defaults::DEFAULT_PORT)?;
        let pacing = Pacing::new(config.min_wait(), config.max_wait())?;
        let probe = ConnectionProbe::new(target.clone()).with_timeout(config.connect_timeout());
        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            target,
            client_count: config.client_count,
            probe,
            pacing,
            sink,
            logger,
            hooks: Box::new(PrintHooks),
            shutdown_tx,
            handles: Vec::new(),
        })
    }

    /// Replace the default lifecycle hooks
    pub fn with_hooks(mut self, hooks: Box<dyn LifecycleHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Get the parsed target
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Number of simulated clients this scheduler drives
    pub fn client_count(&self) -> u32 {
        self.client_count
    }

    /// Check whether clients are currently running
    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Fire the start notification and spawn all simulated clients.
    ///
    /// Each client is an independent tokio task; clients pace and fail
    /// independently and no ordering holds across them.
    pub async fn start(&mut self) {
        if self.is_running() {
            return;
        }

        self.hooks.on_start(&self.target.to_string()).await;
        self.logger.info(&format!(
            "Starting {} simulated clients against {}",
            self.client_count, self.target
        ));

        for client_id in 0..self.client_count {
            let client = SimulatedClient {
                id: client_id,
                probe: self.probe.clone(),
                pacing: self.pacing,
                sink: self.sink.clone(),
                logger: self.logger.clone(),
            };
            let shutdown_rx = self.shutdown_tx.subscribe();
            self.handles.push(tokio::spawn(client.run(shutdown_rx)));
        }
    }

    /// Signal all clients to stop, wait for them to finish, and fire the
    /// stop notification.
    ///
    /// An in-flight probe either completes or is aborted at its current
    /// suspension point; either way its socket is dropped with the probe
    /// scope, so no sockets survive shutdown.
    pub async fn shutdown(&mut self) {
        if !self.is_running() {
            return;
        }

        self.logger.info("Shutting down simulated clients");
        let _ = self.shutdown_tx.send(true);

        let handles = std::mem::take(&mut self.handles);
        futures::future::join_all(handles).await;

        self.hooks.on_stop().await;
    }
}

/// One independent, strictly sequential loop of probes plus pacing
struct SimulatedClient {
    id: u32,
    probe: ConnectionProbe,
    pacing: Pacing,
    sink: Arc<dyn EventSink>,
    logger: LoggerHandle,
}

impl SimulatedClient {
    /// Loop until the shutdown signal flips: probe, emit, pace, repeat.
    ///
    /// One probe completes, including its bounded wait, before pacing and
    /// the next probe begin; this client never issues overlapping probes.
    async fn run(self, mut shutdown: watch::Receiver<bool>) {
        loop {
            let outcome = tokio::select! {
                outcome = self.probe.run() => outcome,
                _ = shutdown.changed() => break,
            };

            if let Some(error) = &outcome.error {
                self.logger.warn(&format!(
                    "client {}: probe failed [{}]: {}",
                    self.id,
                    error.category(),
                    error
                ));
            } else {
                self.logger.debug(&format!(
                    "client {}: server response: {:?}",
                    self.id,
                    outcome.payload.as_deref().unwrap_or_default()
                ));
            }

            // Exactly one event per attempt, success or failure
            self.sink.record(MetricsEvent::from_outcome(&outcome));

            tokio::select! {
                _ = tokio::time::sleep(self.pacing.sample()) => {}
                _ = shutdown.changed() => break,
            }
        }
    }
}
