//! `snapclone-observability` — process-level tracing/logging setup.

pub mod tracing;

pub use tracing::init;
