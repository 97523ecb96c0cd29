//! Pattern 5: Periodic/Timeout Select Loop
//! Ticks, a Deadline, and a Non-Blocking Default
//!
//! Run with: cargo run --bin p5_tick_deadline_loop

use concurrency_patterns::multiplex::{run_multiplexed_loop, LoopConfig, LoopEvent};
use std::time::Duration;

fn tick_until_boom() {
    let config = LoopConfig::new(
        Duration::from_millis(100), // tick interval
        Duration::from_millis(500), // one-shot deadline
    )
    .idle_pause(Duration::from_millis(50));

    run_multiplexed_loop(config, |event| match event {
        LoopEvent::Tick => println!("tick."),
        LoopEvent::Idle => println!("    ."),
        LoopEvent::Boom => println!("BOOM!"),
    });
}

fn main() {
    println!("=== Ticks, a Deadline, and a Non-Blocking Default ===\n");
    tick_until_boom();

    println!("\n=== Key Points ===");
    println!("1. The default arm runs only when neither timer is ready");
    println!("2. The idle pause is a stated knob, not an accidental sleep");
    println!("3. The deadline fires once; observing it ends the loop");
    println!("4. When tick and deadline are both ready, the pick is fair");
}
