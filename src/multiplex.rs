//! Pattern 5: Periodic/Timeout Select Loop
//!
//! One loop, three transitions: a recurring tick, a one-shot deadline
//! that ends the loop, and a non-blocking default taken when neither
//! timer is ready.

use crossbeam::channel::{after, tick};
use crossbeam::select;
use std::thread;
use std::time::Duration;

/// How long the default branch pauses before polling again when nothing
/// is ready.
pub const DEFAULT_IDLE_PAUSE: Duration = Duration::from_millis(25);

/// One observable transition of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// The periodic source fired.
    Tick,
    /// Neither source was ready; the default branch ran.
    Idle,
    /// The one-shot deadline fired. Always the final event.
    Boom,
}

/// Timing knobs for [`run_multiplexed_loop`]. The idle pause is an
/// explicit part of the contract: it bounds how stale the loop's view of
/// the timers can get, so a fired deadline is observed within one pause.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub tick_every: Duration,
    pub deadline: Duration,
    pub idle_pause: Duration,
}

impl LoopConfig {
    pub fn new(tick_every: Duration, deadline: Duration) -> Self {
        LoopConfig {
            tick_every,
            deadline,
            idle_pause: DEFAULT_IDLE_PAUSE,
        }
    }

    /// Overrides the default-branch pause. Zero is legal and means
    /// busy-polling; the loop still terminates.
    pub fn idle_pause(mut self, pause: Duration) -> Self {
        self.idle_pause = pause;
        self
    }
}

/// Runs the three-way loop until the deadline fires, reporting every
/// transition to `sink`.
///
/// Each iteration offers both timer receives; the default branch runs
/// only when neither is ready, so the loop never blocks and never spins
/// past a fired deadline for more than one idle pause. Tick and deadline
/// carry no ordering guarantee against each other: when both are ready
/// the winner is a fair pick, and a tick that wins merely postpones the
/// final transition by one iteration.
pub fn run_multiplexed_loop(config: LoopConfig, mut sink: impl FnMut(LoopEvent)) {
    let ticker = tick(config.tick_every);
    let boom = after(config.deadline);

    loop {
        select! {
            recv(ticker) -> _ => sink(LoopEvent::Tick),
            recv(boom) -> _ => {
                sink(LoopEvent::Boom);
                return;
            }
            default => {
                sink(LoopEvent::Idle);
                thread::sleep(config.idle_pause);
            }
        }
    }
}
