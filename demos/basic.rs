//! A minimal demo that wires the console collector into `tracing`.
//!
//! Run with `cargo run --example basic`. Informational lines land on
//! stdout, warnings and worse on stderr; color follows terminal
//! capability.
use anyhow::Result;
use console_sink::{ConsoleCollector, ConsoleConfig, ConsoleSink};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

fn main() -> Result<()> {
    let config = ConsoleConfig::detect(8);
    let sink = Arc::new(ConsoleSink::stdio(config));
    ConsoleCollector::init_subscriber(sink).map_err(|e| anyhow::anyhow!(e))?;

    info!(module = "demo", "console sink ready");
    debug!(module = "demo", "this line goes to stdout");
    warn!(module = "demo", "this line goes to stderr");
    error!(module = "net", "connection lost");

    Ok(())
}
