//! Timed strategy loops.
//!
//! Each loop clones a sample aggregate `iterations` times and sums the clones'
//! ages into a checksum. The checksum forces the clone to actually happen
//! (nothing for the optimizer to discard) and proves no iteration silently
//! returned a mutated or default value: for a source age of 30 over 100,000
//! iterations the checksum must be 3,000,000.

use std::time::{Duration, Instant};

use snapclone_core::{CloneResult, DeepCopy, deep_clone};
use snapclone_people::{Person, PersonValue};

/// Default iteration count for the timed loops.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Outcome of one timed strategy loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopReport {
    pub strategy: &'static str,
    pub iterations: u32,
    pub checksum: u64,
    pub elapsed: Duration,
}

/// Clone via the hand-written nested deep copy.
pub fn manual_deep_copy_loop(person: &Person, iterations: u32) -> LoopReport {
    let started = Instant::now();
    let mut checksum = 0u64;
    for _ in 0..iterations {
        let copy = person.deep_copy();
        checksum += u64::from(copy.age);
    }
    LoopReport {
        strategy: "manual_deep_copy",
        iterations,
        checksum,
        elapsed: started.elapsed(),
    }
}

/// Clone via the value-aggregate field-wise copy.
pub fn value_copy_loop(person: &PersonValue, iterations: u32) -> LoopReport {
    let started = Instant::now();
    let mut checksum = 0u64;
    for _ in 0..iterations {
        let copy = person.deep_copy();
        checksum += u64::from(copy.age);
    }
    LoopReport {
        strategy: "value_copy",
        iterations,
        checksum,
        elapsed: started.elapsed(),
    }
}

/// Clone via the generic serialization round trip.
pub fn serialized_clone_loop(person: &Person, iterations: u32) -> CloneResult<LoopReport> {
    let started = Instant::now();
    let mut checksum = 0u64;
    for _ in 0..iterations {
        let copy = deep_clone(person)?;
        checksum += u64::from(copy.age);
    }
    Ok(LoopReport {
        strategy: "serialized_clone",
        iterations,
        checksum,
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Person {
        Person::new(30, "Lamborghini")
    }

    #[test]
    fn manual_loop_checksum_sums_every_clone() {
        let report = manual_deep_copy_loop(&bob(), 1_000);
        assert_eq!(report.strategy, "manual_deep_copy");
        assert_eq!(report.checksum, 30 * 1_000);
    }

    #[test]
    fn value_loop_checksum_sums_every_clone() {
        let person = PersonValue::new(30, "Lamborghini");
        let report = value_copy_loop(&person, 1_000);
        assert_eq!(report.checksum, 30 * 1_000);
    }

    #[test]
    fn serialized_loop_over_default_iterations_hits_expected_checksum() {
        let report = serialized_clone_loop(&bob(), DEFAULT_ITERATIONS).unwrap();
        assert_eq!(report.iterations, DEFAULT_ITERATIONS);
        assert_eq!(report.checksum, 3_000_000);
    }

    #[test]
    fn loops_leave_the_source_untouched() {
        let person = bob();
        manual_deep_copy_loop(&person, 100);
        serialized_clone_loop(&person, 100).unwrap();

        assert_eq!(person.age, 30);
        assert_eq!(person.purchase_description(), "Lamborghini");
    }
}
