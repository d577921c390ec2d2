//! Logging setup
//!
//! Console logging through `tracing_subscriber`. `RUST_LOG` takes precedence
//! over the configured level.

use config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if config.json {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    } else {
        builder.try_init().map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    }

    Ok(())
}
