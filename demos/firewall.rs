use std::cell::Cell;

use guard_this::{guard, run};

// Simulated framework callbacks - delegate code that may panic outside our
// control.
fn well_behaved() {
    println!("callback ran to completion");
}

fn misbehaving() {
    panic!("delegate dereferenced stale state");
}

fn main() {
    // Test 1: callback completes - empty result
    println!("=== Test 1: Callback completes ===");
    let result = run(well_behaved);
    println!("Result: {:?}\n", result);

    // Test 2: callback panics - capture instead of a crash
    println!("=== Test 2: Callback panics ===");
    if let Some(failure) = run(misbehaving) {
        println!("Survived: {}", failure);
    }
    println!();

    // Test 3: side effects before the panic stay applied
    println!("=== Test 3: Side effects stay applied ===");
    let delivered = Cell::new(0);
    let failure = run(|| {
        delivered.set(delivered.get() + 1);
        panic!("failed after first delivery");
    });
    println!(
        "Delivered: {}, failure: {}",
        delivered.get(),
        failure.unwrap().message()
    );
    println!();

    // Test 4: direct mode - keep a usable value either way
    println!("=== Test 4: Direct mode with fallback ===");
    let frames_rendered = guard! {
        try -> u32 { panic!("render pass exploded") }
        else { 0 }
    };
    println!("frames_rendered = {}", frames_rendered);
}
