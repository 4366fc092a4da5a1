//! Tracing/logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&TracingConfig::from_env());
}

/// Tracing configuration (filters, output format) and initialization.
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig};
