//! Value-flavored aggregate: every field is an owned value.

use serde::{Deserialize, Serialize};

use snapclone_core::ValueSemantics;

/// A purchase record held by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseValue {
    pub description: String,
}

/// Person built entirely from owned values.
///
/// Cloning already performs a recursive field copy, so shallow and deep copy
/// coincide; both operations come from the [`ValueSemantics`] blanket impls
/// and no test can distinguish them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonValue {
    pub age: u32,
    pub purchase: PurchaseValue,
}

impl PersonValue {
    pub fn new(age: u32, description: impl Into<String>) -> Self {
        Self {
            age,
            purchase: PurchaseValue {
                description: description.into(),
            },
        }
    }
}

impl ValueSemantics for PurchaseValue {}
impl ValueSemantics for PersonValue {}

#[cfg(test)]
mod tests {
    use super::*;
    use snapclone_core::{DeepCopy, ShallowCopy, deep_clone};

    fn bob() -> PersonValue {
        PersonValue::new(30, "Lamborghini")
    }

    #[test]
    fn shallow_copy_is_already_independent() {
        let person = bob();
        let mut copy = person.shallow_copy();

        copy.age = 2;
        copy.purchase.description = "Toy car".to_string();

        assert_eq!(person.age, 30);
        assert_eq!(person.purchase.description, "Lamborghini");
    }

    #[test]
    fn deep_copy_is_indistinguishable_from_shallow_copy() {
        let person = bob();

        let shallow = person.shallow_copy();
        let deep = person.deep_copy();
        assert_eq!(shallow, deep);

        // Both survive mutation of the source equally.
        let mut source = person;
        source.age = 2;
        source.purchase.description = "Toy car".to_string();

        assert_eq!(shallow.age, 30);
        assert_eq!(deep.age, 30);
        assert_eq!(shallow.purchase.description, "Lamborghini");
        assert_eq!(deep.purchase.description, "Lamborghini");
    }

    #[test]
    fn deep_copy_equals_source_at_clone_time() {
        let person = bob();
        assert_eq!(person.deep_copy(), person);
    }

    #[test]
    fn generic_clone_round_trips_the_value_flavor() {
        let person = bob();
        let mut copy = deep_clone(&person).unwrap();

        assert_eq!(copy, person);

        copy.purchase.description = "Toy car".to_string();
        assert_eq!(person.purchase.description, "Lamborghini");
    }
}
