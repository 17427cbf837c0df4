//! Batch regeneration of exchange descriptor fixtures

use anyhow::Result;
use tracing::{info, warn};

use descriptor_dump::{dump_all, DumpConfig, ExchangeRegistry};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let registry = ExchangeRegistry::builtin();
    let config = DumpConfig::default();

    if !config.config_dir.is_dir() {
        // the directory is expected to pre-exist; every identifier will
        // fail to persist without it
        warn!(
            "output directory {} not found",
            config.config_dir.display()
        );
    }

    info!("regenerating descriptors for {} exchanges", registry.len());
    let summary = dump_all(&registry, &config);
    info!(
        "done: {} artifacts written, {} failures",
        summary.written, summary.failed
    );
    Ok(())
}
