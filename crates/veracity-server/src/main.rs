//! Veracity Server CLI
//!
//! Starts the HTTP server for claim verification and history retrieval.

use std::env;
use std::process;
use veracity_server::{config::ServerConfig, start_server, ServerError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let mut config = if args.len() > 2 && args[1] == "--config" {
        // Load from specified config file
        let config_path = &args[2];
        ServerConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default configuration");
        eprintln!("Usage: veracity-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default()
    };

    // Environment override for the inference endpoint, resolved once here
    config.apply_env_overrides();

    // Start the server
    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Veracity Server - Claim Verification and History");
    println!();
    println!("USAGE:");
    println!("    veracity-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    VERACITY_INFERENCE_URL    Full URL of the inference endpoint;");
    println!("                              overrides the configured value");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 3001)");
    println!("    - inference_url: Inference endpoint, path included");
    println!("                     (default 'http://127.0.0.1:8000/verify')");
    println!("    - inference_timeout_secs: Request timeout (default 30)");
    println!("    - db_path: SQLite database path (default 'veracity.db')");
    println!();
}
