//! `snapclone-harness` — timed loops over the cloning strategies.

pub mod runner;

pub use runner::{DEFAULT_ITERATIONS, LoopReport};
