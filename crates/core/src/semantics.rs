//! Copy-semantics traits: shallow vs deep duplication.
//!
//! The owned-vs-shared distinction is kept visible in the types: a shared
//! substructure is a handle field (`Rc<RefCell<_>>`), an owned substructure is
//! a plain field. Which trait impl a type needs follows from that distinction
//! rather than from runtime behavior.

/// Shallow copy: duplicate top-level fields only.
///
/// Handle fields are copied as handles, so the copy and the source observe
/// the same substructure. For aggregates without handle fields this is
/// already a full copy.
pub trait ShallowCopy {
    fn shallow_copy(&self) -> Self;
}

/// Deep copy: duplicate top-level fields and every owned or shared
/// substructure.
///
/// The result shares no mutable state with the source; mutating either side
/// is never observable through the other.
pub trait DeepCopy {
    fn deep_copy(&self) -> Self;
}

/// Marker trait for aggregates built entirely from owned values.
///
/// For such types a structural `clone` already duplicates every substructure,
/// so shallow and deep copy coincide. The blanket impls below make that
/// guarantee concrete: implementing `ValueSemantics` is a claim that the type
/// holds no shared handles, and it buys both copy operations for free.
pub trait ValueSemantics: Clone {}

impl<T: ValueSemantics> ShallowCopy for T {
    fn shallow_copy(&self) -> Self {
        self.clone()
    }
}

impl<T: ValueSemantics> DeepCopy for T {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}
