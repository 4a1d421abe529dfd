//! COP Server Entry Point
//!
//! Initializes logging, loads configuration, constructs the capability
//! registry and dispatcher, and starts the HTTP transport.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use cop_server::core::{CapabilityRegistry, Config, Dispatcher, HandshakeMetrics, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Registry entries are fixed at startup; everything after this point
    // only reads them.
    let registry = Arc::new(CapabilityRegistry::with_defaults());
    let dispatcher = Dispatcher::new(registry);
    let metrics = Arc::new(HandshakeMetrics::new());

    info!("Capability registry initialized");

    let transport = HttpTransport::new(config.http);
    transport.run(dispatcher, metrics).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
