//! `snapclone-core` — copy-semantics building blocks.
//!
//! This crate contains the copy-semantics traits, the cloning error model, and
//! the generic serialization-based deep clone. No sample types live here.

pub mod error;
pub mod semantics;
pub mod snapshot;

pub use error::{CloneError, CloneResult};
pub use semantics::{DeepCopy, ShallowCopy, ValueSemantics};
pub use snapshot::deep_clone;
