//! Log output for the `ferrand` binary.
//!
//! Events go to stderr so that stdout carries nothing but results. The level
//! is taken from `RUST_LOG` and defaults to `warn`; `RUST_LOG=debug` shows the
//! value drawn by every call.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(true)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}
