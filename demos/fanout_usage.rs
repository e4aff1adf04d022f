//! Fanout logger usage example
//!
//! Wires the facade to in-process channel sinks so the forwarded payloads
//! can be printed instead of shipped over HTTP.
//!
//! Run with: cargo run --example fanout_usage

use rust_fanout_logger::prelude::*;
use rust_fanout_logger::{error, errorf, info, infof};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Fanout Logger - Usage Example ===\n");

    let (columnar, rows) = ChannelSink::unbounded("columnar");
    let (chat, alerts) = ChannelSink::unbounded("chat");

    let logger = FanoutLogger::builder()
        .backend(ConsoleBackend::new().with_min_level(Level::Debug))
        .config(DispatchConfig::new(
            "https://chat.example/hook?",
            "orders",
            "https://ch.example/insert",
            "prod",
        ))
        .sinks(Arc::new(columnar), Arc::new(chat))
        .build()?;

    rust_fanout_logger::set_logger(Arc::new(logger));

    println!("1. Logging through the process-wide logger:");
    info!("order ", 8812, " accepted");
    infof!("{} items reserved", 3);
    error!("bad", "-input");
    errorf!("payment declined: {}", "card expired");

    std::thread::sleep(Duration::from_millis(200));

    println!("\n2. Columnar rows:");
    for row in rows.try_iter() {
        println!("   {}", row);
    }

    println!("\n3. Chat alerts:");
    for alert in alerts.try_iter() {
        println!("   {}", alert);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
