//! Pattern 3: Bounded Channel Handoff
//! Why a Full Buffer Needs a Second Thread
//!
//! Run with: cargo run --bin p3_bounded_handoff

use crossbeam::channel::bounded;
use std::thread;

fn bounded_handoff() {
    // A channel with room for 2 pending values.
    let (tx, rx) = bounded(2);

    // Sending 1, 2, 3 from *this* thread would jam: the third send
    // blocks on the full buffer, and the receives that would drain it
    // sit below, never reached.
    //
    // Draining one value before the third send also works, but leans on
    // send/receive ordering that is easy to break when the code grows.
    // Handing the sends to their own thread removes the coupling entirely.
    let producer = thread::spawn(move || {
        tx.send(1).unwrap();
        tx.send(2).unwrap();
        tx.send(3).unwrap(); // waits here until a slot frees up
    });

    println!("{}", rx.recv().unwrap());
    println!("{}", rx.recv().unwrap());
    println!("{}", rx.recv().unwrap());

    producer.join().unwrap();
}

fn main() {
    println!("=== Why a Full Buffer Needs a Second Thread ===\n");
    bounded_handoff();

    println!("\n=== Key Points ===");
    println!("1. A bounded send blocks only once capacity is exhausted");
    println!("2. Blocking with the matching receive downstream is a deadlock");
    println!("3. Separate producer and consumer threads and the jam vanishes");
}
