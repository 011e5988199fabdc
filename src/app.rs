//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config},
    error::Result,
    logging::Logger,
    scheduler::ProbeScheduler,
    sink::LoggingSink,
};
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        Ok(Self { cli })
    }

    /// Run the harness: load configuration, start the scheduler, wait
    /// for the configured run time or Ctrl-C, then shut down cleanly.
    pub async fn run(self) -> Result<()> {
        let config = load_config(self.cli)?;

        colored::control::set_override(config.enable_color);

        println!("{} v{}", "TCP Load Harness".bold(), crate::VERSION);

        if config.debug {
            println!("\nConfiguration Summary:");
            println!("{}", display_config_summary(&config));
            println!();
        }

        let logger = Arc::new(Logger::with_config("harness", &config));
        let sink = Arc::new(LoggingSink::new(logger.clone()));
        let mut scheduler = ProbeScheduler::new(&config, sink, logger.clone())?;

        if config.verbose {
            println!(
                "Probing {} with {} clients, {}ms-{}ms pacing",
                scheduler.target(),
                scheduler.client_count(),
                config.min_wait_ms,
                config.max_wait_ms
            );
        }

        scheduler.start().await;

        match config.run_time_secs {
            Some(secs) => {
                // Bounded run, but still stop early on Ctrl-C
                tokio::select! {
                    _ = tokio::time::sleep(Duration::from_secs(secs)) => {
                        logger.info(&format!("Run time of {}s elapsed", secs));
                    }
                    _ = tokio::signal::ctrl_c() => {
                        logger.info("Interrupted, shutting down");
                    }
                }
            }
            None => {
                let _ = tokio::signal::ctrl_c().await;
                logger.info("Interrupted, shutting down");
            }
        }

        scheduler.shutdown().await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_app_creation() {
        let cli = Cli::parse_from(["tlh", "--host", "localhost:2323"]);
        assert!(App::new(cli).is_ok());
    }
}
