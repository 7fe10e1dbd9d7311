// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! `RUST_LOG` directives are used as given; when it is unset or empty every
//! target logs at `info`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt().with_env_filter(filter(&directives)).init();
}

/// Builds the filter for `directives`, falling back to `info`. Invalid
/// directives are reported on stderr and skipped.
pub fn filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}
