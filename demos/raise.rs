use guard_this::{guard, raise, run, Captured};

fn checked_add(total: u64, amount: u64, limit: u64) -> u64 {
    if total + amount > limit {
        raise!("Overflow", "value exceeds limit", {
            limit: limit,
            total: total,
            amount: amount,
        });
    }
    total + amount
}

fn main() {
    // Test 1: category and structured data survive the frame
    println!("=== Test 1: Structured capture ===");
    let captured = run(|| {
        checked_add(90, 20, 100);
    })
    .unwrap();
    println!("{}\n", captured);

    // Test 2: branch on category at the call site
    println!("=== Test 2: Branch on category ===");
    guard! {
        try { checked_add(90, 20, 100); }
        catch e {
            if e.is("Overflow") {
                println!("overflow: limit {}", e.get("limit").unwrap());
            } else {
                println!("unexpected failure: {}", e.message());
            }
        }
    }
    println!();

    // Test 3: plain panics land in the same channel
    println!("=== Test 3: Plain panic, same channel ===");
    let captured = run(|| panic!("unannotated failure")).unwrap();
    println!(
        "category = {:?} (generic {:?}), message = {:?}",
        captured.category(),
        Captured::PANIC,
        captured.message()
    );
}
