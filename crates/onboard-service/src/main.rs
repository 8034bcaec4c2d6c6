//! Onboard extraction service binary
//!
//! Starts the HTTP server answering identity-document extraction requests.

use onboard_service::{config::ServiceConfig, start_server, ServiceError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServiceError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServiceConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using the mock backend on 127.0.0.1:5000");
        eprintln!("Usage: onboard-service --config <path-to-config.toml>");
        eprintln!();
        ServiceConfig::default_dev_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Onboard Extraction Service - identity document field extraction");
    println!();
    println!("USAGE:");
    println!("    onboard-service --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /extract      multipart/form-data with a 'file' part");
    println!("    GET  /health       liveness and active backend");
    println!();
    println!("CONFIGURATION:");
    println!("    bind_address       IP address to bind (default '127.0.0.1')");
    println!("    bind_port          Port number (default 5000)");
    println!("    max_upload_bytes   Request body limit (default 10 MB)");
    println!("    [backend]          kind = \"mock\" | \"ocr\" | \"proxy\"");
    println!();
}
