//! Reference-flavored aggregate: a person holding a shared purchase record.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use snapclone_core::{DeepCopy, ShallowCopy};

/// A purchase record.
///
/// No identity of its own; it exists only as the substructure of whichever
/// person holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub description: String,
}

/// Person whose purchase sits behind a shared handle.
///
/// The `Rc<RefCell<_>>` keeps the shared-vs-owned distinction visible in the
/// type: a structural copy of `Person` duplicates the handle, not the record,
/// so a true deep copy must clone the record explicitly. Serde serializes
/// through the handle, which is how [`snapclone_core::deep_clone`] produces an
/// independent record from this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub age: u32,
    pub purchase: Rc<RefCell<Purchase>>,
}

impl Person {
    pub fn new(age: u32, description: impl Into<String>) -> Self {
        Self {
            age,
            purchase: Rc::new(RefCell::new(Purchase {
                description: description.into(),
            })),
        }
    }

    /// Whether `self` and `other` observe the same purchase record.
    pub fn shares_purchase_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.purchase, &other.purchase)
    }

    pub fn purchase_description(&self) -> String {
        self.purchase.borrow().description.clone()
    }

    pub fn set_purchase_description(&self, description: impl Into<String>) {
        self.purchase.borrow_mut().description = description.into();
    }
}

/// Structural equality: compares the record contents, not handle identity.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.age == other.age && *self.purchase.borrow() == *other.purchase.borrow()
    }
}

impl Eq for Person {}

impl ShallowCopy for Person {
    /// Copies `age` and the purchase handle; the copy shares the record with
    /// the source.
    fn shallow_copy(&self) -> Self {
        Self {
            age: self.age,
            purchase: Rc::clone(&self.purchase),
        }
    }
}

impl DeepCopy for Person {
    /// Shallow copy of the root, then replace the handle with a fresh record.
    ///
    /// One level suffices: `Purchase` holds no further handles.
    fn deep_copy(&self) -> Self {
        let mut other = self.shallow_copy();
        other.purchase = Rc::new(RefCell::new(self.purchase.borrow().clone()));
        other
    }
}
