//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`). Ledger operations log
//! under the `bankbook_accounting` target, so
//! `RUST_LOG=bankbook_accounting=debug` shows every accepted and rejected
//! operation.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize JSON tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}

/// Initialize compact, human-readable tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_pretty() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .compact()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_initialization_is_a_no_op() {
        super::init();
        super::init();
        super::init_pretty();
        ::tracing::info!("observability initialized");
    }
}
