//! `washboard-observability` — process-wide logging setup.

pub mod tracing;

pub use tracing::init;
