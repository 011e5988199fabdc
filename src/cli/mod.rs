//! Command-line interface module

use clap::Parser;

/// TCP Load Harness - concurrent connection probes with latency metrics
#[derive(Parser, Debug, Clone)]
#[command(name = "tcp-load-harness")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target address as "host:port" or bare "host" (default port 2323)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Number of concurrent simulated clients
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_CLIENT_COUNT)]
    pub clients: u32,

    /// Connect-plus-read timeout in seconds
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_CONNECT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Minimum inter-probe wait in milliseconds
    #[arg(long, default_value_t = crate::defaults::DEFAULT_MIN_WAIT.as_millis() as u64)]
    pub min_wait: u64,

    /// Maximum inter-probe wait in milliseconds
    #[arg(long, default_value_t = crate::defaults::DEFAULT_MAX_WAIT.as_millis() as u64)]
    pub max_wait: u64,

    /// Stop after this many seconds (runs until Ctrl-C when omitted)
    #[arg(short, long)]
    pub run_time: Option<u64>,

    /// Print an example .env file and exit
    #[arg(long)]
    pub env_example: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.clients == 0 {
            return Err("Client count must be greater than 0".to_string());
        }

        if self.min_wait > self.max_wait {
            return Err(format!(
                "--min-wait ({}) cannot exceed --max-wait ({})",
                self.min_wait, self.max_wait
            ));
        }

        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err("--host cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        if let Some(host) = &self.host {
            summary.push_str(&format!("  Target: {}\n", host));
        }
        summary.push_str(&format!("  Clients: {}\n", self.clients));
        summary.push_str(&format!("  Timeout: {}s\n", self.timeout));
        summary.push_str(&format!(
            "  Wait interval: {}ms - {}ms\n",
            self.min_wait, self.max_wait
        ));
        if let Some(run_time) = self.run_time {
            summary.push_str(&format!("  Run time: {}s\n", run_time));
        }
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tlh"]);
        assert_eq!(cli.clients, 10);
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.min_wait, 1000);
        assert_eq!(cli.max_wait, 3000);
        assert!(cli.host.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_host_flag() {
        let cli = Cli::parse_from(["tlh", "--host", "localhost:2323"]);
        assert_eq!(cli.host.as_deref(), Some("localhost:2323"));
    }

    #[test]
    fn test_inverted_wait_interval_rejected() {
        let cli = Cli::parse_from(["tlh", "--min-wait", "5000", "--max-wait", "100"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zero_clients_rejected() {
        let cli = Cli::parse_from(["tlh", "--clients", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_env_example_flag() {
        let cli = Cli::parse_from(["tlh", "--env-example"]);
        assert!(cli.env_example);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_config_summary_contains_values() {
        let cli = Cli::parse_from(["tlh", "--host", "example.com", "--run-time", "30"]);
        let summary = cli.get_config_summary();
        assert!(summary.contains("Target: example.com"));
        assert!(summary.contains("Run time: 30s"));
    }
}
