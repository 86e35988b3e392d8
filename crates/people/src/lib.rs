//! `snapclone-people` — sample aggregates in both copy flavors.
//!
//! `person` holds its purchase behind a shared handle (reference flavor);
//! `person_value` holds it as an owned field (value flavor).

pub mod person;
pub mod person_value;

pub use person::{Person, Purchase};
pub use person_value::{PersonValue, PurchaseValue};
