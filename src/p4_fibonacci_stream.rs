//! Pattern 4: Cancellable Generator
//! Streaming Values Until the Consumer Says Stop
//!
//! Run with: cargo run --bin p4_fibonacci_stream

use concurrency_patterns::generator::generate;
use crossbeam::channel::bounded;
use std::thread;

fn stream_until_cancelled() {
    let (out_tx, out_rx) = bounded(0);
    let (cancel_tx, cancel_rx) = bounded(0);

    // The consumer takes ten values, then sends the one and only
    // cancellation token.
    let consumer = thread::spawn(move || {
        for _ in 0..10 {
            println!("{}", out_rx.recv().unwrap());
        }
        cancel_tx.send(()).unwrap();
    });

    // The generator runs right here until that token arrives.
    let delivered = generate(out_tx, cancel_rx);
    println!("quit after {} values", delivered);

    consumer.join().unwrap();
}

fn main() {
    println!("=== Streaming Values Until the Consumer Says Stop ===\n");
    stream_until_cancelled();

    println!("\n=== Key Points ===");
    println!("1. Every round offers the send and the cancel receive at once");
    println!("2. A rendezvous send completes only when a receive is waiting");
    println!("3. Cancellation is a message, not a preemption");
    println!("4. After the token, the stream is closed for good");
}
