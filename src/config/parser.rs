//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::Result,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration.
    ///
    /// Precedence: defaults ← `.env`/environment ← CLI flags. The final
    /// configuration is validated before it is returned; any failure here
    /// is fatal and aborts startup.
    pub fn parse(&self) -> Result<Config> {
        let mut config = Config::default();

        // Load from environment file if it exists
        EnvManager::load_env_file(self.cli.debug)?;

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref host) = self.cli.host {
            config.target_address = host.clone();
        }

        if self.cli.clients != crate::defaults::DEFAULT_CLIENT_COUNT {
            config.client_count = self.cli.clients;
        }

        if self.cli.timeout != crate::defaults::DEFAULT_CONNECT_TIMEOUT.as_secs() {
            config.connect_timeout_secs = self.cli.timeout;
        }

        if self.cli.min_wait != crate::defaults::DEFAULT_MIN_WAIT.as_millis() as u64 {
            config.min_wait_ms = self.cli.min_wait;
        }

        if self.cli.max_wait != crate::defaults::DEFAULT_MAX_WAIT.as_millis() as u64 {
            config.max_wait_ms = self.cli.max_wait;
        }

        if self.cli.run_time.is_some() {
            config.run_time_secs = self.cli.run_time;
        }

        if self.cli.no_color {
            config.enable_color = false;
        }

        // Verbose and debug flags are CLI-only
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            println!("Applied CLI overrides to configuration");
            println!(
                "Final config: target={}, clients={}, timeout={}s, wait={}ms-{}ms",
                config.target_address,
                config.client_count,
                config.connect_timeout_secs,
                config.min_wait_ms,
                config.max_wait_ms
            );
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Target: {}", config.target_address));
    summary.push(format!("Clients: {}", config.client_count));
    summary.push(format!("Timeout: {}s", config.connect_timeout_secs));
    summary.push(format!(
        "Wait interval: {}ms - {}ms",
        config.min_wait_ms, config.max_wait_ms
    ));
    match config.run_time_secs {
        Some(secs) => summary.push(format!("Run time: {}s", secs)),
        None => summary.push("Run time: until interrupted".to_string()),
    }
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests that
    // touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_harness_env_vars() {
        for name in crate::config::env::ENV_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_config_parser_defaults() {
        let config = Config::default();

        assert_eq!(config.client_count, crate::defaults::DEFAULT_CLIENT_COUNT);
        assert_eq!(
            config.connect_timeout_secs,
            crate::defaults::DEFAULT_CONNECT_TIMEOUT.as_secs()
        );
        assert_eq!(config.enable_color, crate::defaults::DEFAULT_ENABLE_COLOR);
        assert!(!config.verbose);
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_harness_env_vars();

        let cli = Cli::parse_from([
            "tlh",
            "--host",
            "example.com:4242",
            "--clients",
            "25",
            "--timeout",
            "3",
            "--no-color",
            "--verbose",
        ]);
        let config = ConfigParser::new(cli).parse().unwrap();

        assert_eq!(config.target_address, "example.com:4242");
        assert_eq!(config.client_count, 25);
        assert_eq!(config.connect_timeout_secs, 3);
        assert!(!config.enable_color);
        assert!(config.verbose);
    }

    #[test]
    fn test_cli_overrides_env_vars() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_harness_env_vars();

        env::set_var("CLIENT_COUNT", "8");

        let cli = Cli::parse_from(["tlh", "--clients", "12"]);
        let config = ConfigParser::new(cli).parse().unwrap();

        // CLI should override environment
        assert_eq!(config.client_count, 12);

        env::remove_var("CLIENT_COUNT");
    }

    #[test]
    fn test_env_vars_override_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_harness_env_vars();

        env::set_var("TARGET_ADDRESS", "10.1.2.3:9000");
        env::set_var("MIN_WAIT_MS", "100");
        env::set_var("MAX_WAIT_MS", "200");

        let cli = Cli::parse_from(["tlh"]);
        let config = ConfigParser::new(cli).parse().unwrap();

        assert_eq!(config.target_address, "10.1.2.3:9000");
        assert_eq!(config.min_wait_ms, 100);
        assert_eq!(config.max_wait_ms, 200);

        clear_harness_env_vars();
    }

    #[test]
    fn test_out_of_range_env_value_is_rejected_at_merge() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_harness_env_vars();

        env::set_var("CLIENT_COUNT", "10001");

        let cli = Cli::parse_from(["tlh"]);
        let result = ConfigParser::new(cli).parse();
        assert!(result.is_err(), "CLIENT_COUNT=10001 must fail validation");

        env::remove_var("CLIENT_COUNT");
    }

    #[test]
    fn test_invalid_final_config_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_harness_env_vars();

        let cli = Cli::parse_from(["tlh", "--min-wait", "5000", "--max-wait", "100"]);
        assert!(ConfigParser::new(cli).parse().is_err());
    }

    #[test]
    fn test_config_summary() {
        let config = Config::default();
        let summary = display_config_summary(&config);

        assert!(summary.contains("Target:"));
        assert!(summary.contains("Clients:"));
        assert!(summary.contains("Timeout:"));
        assert!(summary.contains("Wait interval:"));
    }
}
