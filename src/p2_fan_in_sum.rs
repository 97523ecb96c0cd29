//! Pattern 2: Fan-In Aggregation
//! Splitting a Sum Across Producer Threads
//!
//! Run with: cargo run --bin p2_fan_in_sum

use concurrency_patterns::fan_in::{fan_in_sum, fan_in_sum_n, partial_sum};
use crossbeam::channel::bounded;
use rayon::prelude::*;
use std::thread;

fn two_way_fan_in() {
    let values = [7, 2, 8, -9, 4, 0];
    let (tx, rx) = bounded(0);

    let (front, back) = values.split_at(values.len() / 2);
    thread::scope(|s| {
        s.spawn(|| partial_sum(front, &tx)); // [7, 2, 8]
        s.spawn(|| partial_sum(back, &tx)); // [-9, 4, 0]

        // Whichever producer finishes first fills x; the order varies
        // run to run, the total never does.
        let (x, y) = (rx.recv().unwrap(), rx.recv().unwrap());
        println!("{} {} {}", x, y, x + y);
    });

    println!("fan_in_sum: {}", fan_in_sum(&values));
}

fn n_way_fan_in() {
    let data: Vec<i64> = (1..=100).collect();
    println!("4-way fan-in over 1..=100: {}", fan_in_sum_n(&data, 4));
}

fn rayon_cross_check() {
    let data: Vec<i64> = (1..=100).collect();
    let manual = fan_in_sum(&data);
    let parallel: i64 = data.par_iter().sum();
    println!("manual fan-in: {}, rayon: {}", manual, parallel);
    assert_eq!(manual, parallel);
}

fn main() {
    println!("=== Splitting a Sum Across Producer Threads ===\n");
    two_way_fan_in();

    println!("\n=== N-Way Generalization ===");
    n_way_fan_in();

    println!("\n=== Rayon Cross-Check ===");
    rayon_cross_check();

    println!("\n=== Key Points ===");
    println!("1. Each producer sums one contiguous partition");
    println!("2. One receive per producer, then combine");
    println!("3. Addition is commutative, so receive order is irrelevant");
    println!("4. For plain data parallelism, rayon gets you the same sum");
}
