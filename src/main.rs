//! Bounded KV demo
//!
//! Walks a fixed-capacity store through the monthly-report scenario:
//! reports are cached under a memory bound, and the oldest one is evicted
//! whenever a new month arrives.

mod config;
mod error;
mod store;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use store::BoundedKvStore;

/// Entry point for the bounded store demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the store with the configured capacity
/// 4. Insert a stream of monthly reports, logging survivors after each
/// 5. Print final statistics as JSON
fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_kv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: max_entries={}", config.max_entries);

    let mut store =
        BoundedKvStore::new(config.max_entries).context("failed to create store")?;
    info!("Store initialized with capacity {}", store.capacity());

    for month in 1..=7 {
        let key = format!("month-{}", month);
        store.set(key.clone(), format!("report-data-{}", month));

        let keys: Vec<&str> = store.keys().collect();
        info!(
            "After insert {}: size={} keys={:?}",
            key,
            store.len(),
            keys
        );
    }

    // A read after the run: early months are gone, late ones survive
    info!("get month-1 -> {:?}", store.get("month-1"));
    info!("get month-7 -> {:?}", store.get("month-7"));

    let stats = serde_json::to_string_pretty(&store.stats())
        .context("failed to serialize stats")?;
    info!("Final stats:\n{}", stats);

    Ok(())
}
