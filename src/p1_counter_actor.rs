//! Pattern 1: Shared State Behind One Lock
//! Variant: an Actor Owning the Map Outright
//!
//! Run with: cargo run --bin p1_counter_actor

use concurrency_patterns::actor::{CounterActor, CounterCommand};
use crossbeam::channel::unbounded;
use std::thread;

fn actor_counting() {
    let (commands, actor) = CounterActor::spawn();

    // Three workers send increments; nobody holds a lock anywhere.
    let mut workers = vec![];
    for id in 0..3 {
        let commands_clone = commands.clone();
        workers.push(thread::spawn(move || {
            for _ in 0..100 {
                commands_clone
                    .send(CounterCommand::Increment("requests".to_string()))
                    .unwrap();
            }
            println!("Worker {} done", id);
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    // Request-reply: the answer comes back on a channel of its own.
    let (reply_tx, reply_rx) = unbounded();
    commands
        .send(CounterCommand::Get("requests".to_string(), reply_tx))
        .unwrap();
    println!("requests = {}", reply_rx.recv().unwrap());

    commands.send(CounterCommand::Shutdown).unwrap();
    actor.join().unwrap();
}

fn main() {
    println!("=== An Actor Owning the Map Outright ===\n");
    actor_counting();

    println!("\n=== Key Points ===");
    println!("1. Exactly one thread owns the map; commands serialize access");
    println!("2. Reads use request-reply over a dedicated channel");
    println!("3. Shutdown is just another message, then join the actor");
    println!("4. Same contract as the mutex counter, different mechanism");
}
