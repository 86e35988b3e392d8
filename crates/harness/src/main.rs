//! Demo binary: shallow vs deep copy, then timed strategy loops.

use anyhow::{Context, Result};
use tracing::info;

use snapclone_core::{DeepCopy, ShallowCopy};
use snapclone_harness::DEFAULT_ITERATIONS;
use snapclone_harness::runner::{manual_deep_copy_loop, serialized_clone_loop, value_copy_loop};
use snapclone_people::{Person, PersonValue};

fn main() -> Result<()> {
    snapclone_observability::init();

    let iterations = iterations_from_env_or_args()?;

    demo_reference_flavor();
    demo_value_flavor();

    let bob = Person::new(30, "Lamborghini");
    let bob_value = PersonValue::new(30, "Lamborghini");

    for report in [
        manual_deep_copy_loop(&bob, iterations),
        value_copy_loop(&bob_value, iterations),
        serialized_clone_loop(&bob, iterations).context("serialized clone loop failed")?,
    ] {
        info!(
            strategy = report.strategy,
            iterations = report.iterations,
            checksum = report.checksum,
            elapsed_us = report.elapsed.as_micros() as u64,
            "strategy timed"
        );
    }

    Ok(())
}

/// Iteration count: first CLI argument, else `SNAPCLONE_ITERATIONS`, else the
/// default of 100,000.
fn iterations_from_env_or_args() -> Result<u32> {
    let raw = match std::env::args().nth(1) {
        Some(arg) => Some(arg),
        None => std::env::var("SNAPCLONE_ITERATIONS").ok(),
    };
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid iteration count: {raw}")),
        None => Ok(DEFAULT_ITERATIONS),
    }
}

/// Reference flavor: shallow copy shares the purchase record, deep copy does
/// not.
fn demo_reference_flavor() {
    let bob = Person::new(30, "Lamborghini");
    info!(age = bob.age, purchase = %bob.purchase_description(), "created Bob (reference flavor)");

    let shared = bob.shallow_copy();
    info!(
        shares_purchase = bob.shares_purchase_with(&shared),
        "shallow copy shares Bob's purchase record"
    );

    let mut son = bob.deep_copy();
    son.age = 2;
    son.set_purchase_description("Toy car");
    info!(age = son.age, purchase = %son.purchase_description(), "adjusted Bob's son");
    info!(
        age = bob.age,
        purchase = %bob.purchase_description(),
        "Bob is unaffected by changes to his son"
    );
}

/// Value flavor: shallow and deep copy coincide, both fully independent.
fn demo_value_flavor() {
    let bob = PersonValue::new(30, "Lamborghini");
    info!(age = bob.age, purchase = %bob.purchase.description, "created Bob (value flavor)");

    let mut son = bob.shallow_copy();
    son.age = 2;
    son.purchase.description = "Toy car".to_string();
    info!(age = son.age, purchase = %son.purchase.description, "adjusted Bob's son");
    info!(
        age = bob.age,
        purchase = %bob.purchase.description,
        "value semantics made even the shallow copy independent"
    );
}
