//! TCP Load Harness - Main CLI Application
//!
//! Opens many concurrent TCP connections against a target server,
//! measures per-connection latency and payload size, and reports one
//! metrics event per probe.

use clap::Parser;
use std::process;
use tcp_load_harness::{app::App, cli::Cli, config::EnvManager, error::AppError};

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse and validate command line arguments
    let cli = Cli::parse();
    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    if cli.env_example {
        print!("{}", EnvManager::create_example_env_content());
        return;
    }

    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e);

        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> tcp_load_harness::Result<()> {
    if cli.debug {
        println!(
            "{} v{}",
            tcp_load_harness::PKG_NAME,
            tcp_load_harness::VERSION
        );
        println!("Debug mode enabled");
        println!();
    }

    let app = App::new(cli)?;
    app.run().await
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Target format is \"host:port\" or bare \"host\" (default port 2323)");
            eprintln!("  - Ports must be in 1-65535");
            eprintln!("  - --min-wait must not exceed --max-wait");
            eprintln!("  - Check your .env file format");
        }
        AppError::Execution(_) => {
            eprintln!();
            eprintln!("Execution troubleshooting:");
            eprintln!("  - Verify the target server is running and reachable");
            eprintln!("  - Increase the bound with --timeout");
            eprintln!("  - Reduce concurrency with --clients");
        }
        _ => {}
    }
}
