//! Pattern 1: Shared State Behind One Lock
//! A Keyed Counter Safe for Concurrent Use
//!
//! Run with: cargo run --bin p1_safe_counter

use concurrency_patterns::counter::SafeCounter;
use std::sync::Arc;
use std::thread;

fn concurrent_counting() {
    let counter = Arc::new(SafeCounter::new());
    let mut handles = vec![];

    // 1000 threads all hammer the same key at once.
    for _ in 0..1000 {
        let counter_clone = Arc::clone(&counter);
        handles.push(thread::spawn(move || {
            counter_clone.increment("somekey");
        }));
    }

    // Joining the handles is the real "wait until everyone is done";
    // sleeping and hoping is not.
    for handle in handles {
        handle.join().unwrap();
    }

    println!("somekey = {}", counter.get("somekey"));
    println!("other   = {}", counter.get("other"));
}

fn main() {
    println!("=== A Keyed Counter Safe for Concurrent Use ===\n");
    concurrent_counting();

    println!("\n=== Key Points ===");
    println!("1. The map lives behind one Mutex; only the counter touches it");
    println!("2. The lock guard releases on every exit path when it drops");
    println!("3. Absent keys read as zero, not as an error");
    println!("4. Join the handles; all 1000 increments land before the read");
}
