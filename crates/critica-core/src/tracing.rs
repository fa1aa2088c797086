//! Tracing bootstrap shared by every binary in the workspace.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON stdout subscriber. `RUST_LOG` controls the filter;
/// without it everything at `info` and above is emitted.
///
/// Idempotent: a second call loses the race for the global subscriber and
/// is ignored, which keeps test binaries that share a process happy.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
