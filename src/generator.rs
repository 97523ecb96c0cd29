//! Pattern 4: Cancellable Generator
//!
//! A producer that offers two operations in one multiplexed wait: hand
//! the next value to a consumer, or accept a cancellation message. Each
//! round, whichever side becomes ready first wins; when both are ready
//! at once the choice is a fair coin flip, and the state machine below
//! is written so either outcome is legal.

use crossbeam::channel::{Receiver, Sender};
use crossbeam::select;

/// Position in the Fibonacci sequence: the value about to be handed out
/// and the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibSequence {
    current: u64,
    next: u64,
}

impl FibSequence {
    pub fn new() -> Self {
        FibSequence { current: 0, next: 1 }
    }

    /// The value the generator is currently offering.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Moves one position forward. Fixed-width wrap keeps the sequence
    /// going past fib(93) instead of aborting.
    pub fn advance(&mut self) {
        let sum = self.current.wrapping_add(self.next);
        self.current = self.next;
        self.next = sum;
    }
}

impl Default for FibSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Which of the two racing channel operations completed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenEvent {
    /// A consumer took the offered value.
    Sent,
    /// The cancellation side won (a token arrived, or no counterpart
    /// can ever show up again).
    Cancelled,
}

/// The generator's two states. `Stopped` is terminal: no event leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenState {
    Running(FibSequence),
    Stopped,
}

impl GenState {
    /// Transition on the outcome of one multiplexed wait. The sequence
    /// only advances after a successful handoff.
    pub fn step(self, event: GenEvent) -> GenState {
        match (self, event) {
            (GenState::Running(mut seq), GenEvent::Sent) => {
                seq.advance();
                GenState::Running(seq)
            }
            (GenState::Running(_), GenEvent::Cancelled) => GenState::Stopped,
            (GenState::Stopped, _) => GenState::Stopped,
        }
    }
}

/// Streams Fibonacci values over `out` until a message arrives on
/// `cancel`. Returns how many values were delivered.
///
/// Every iteration offers the send and the cancel receive
/// simultaneously; neither branch has priority. A disconnected
/// counterpart on either channel also stops the stream: with the
/// consumer gone no send can ever complete, and a dropped cancel sender
/// can never rendezvous, so `Stopped` is the only state left to take.
/// The output sender is dropped on return, which means a receive
/// attempted after cancellation observes a closed channel rather than
/// a stale value.
pub fn generate(out: Sender<u64>, cancel: Receiver<()>) -> usize {
    let mut state = GenState::Running(FibSequence::new());
    let mut delivered = 0;

    loop {
        let offered = match state {
            GenState::Running(seq) => seq.current(),
            GenState::Stopped => return delivered,
        };

        let event = select! {
            send(out, offered) -> res => match res {
                Ok(()) => GenEvent::Sent,
                Err(_) => GenEvent::Cancelled,
            },
            recv(cancel) -> _ => GenEvent::Cancelled,
        };

        if let GenEvent::Sent = event {
            delivered += 1;
        }
        state = state.step(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::bounded;
    use std::thread;

    #[test]
    fn test_sequence_prefix() {
        let mut seq = FibSequence::new();
        let mut produced = vec![];
        for _ in 0..10 {
            produced.push(seq.current());
            seq.advance();
        }
        assert_eq!(produced, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_advance_never_aborts() {
        // Far past fib(93), where u64 wraps.
        let mut seq = FibSequence::new();
        for _ in 0..200 {
            seq.advance();
        }
    }

    #[test]
    fn test_step_advances_only_on_handoff() {
        let start = GenState::Running(FibSequence::new());

        let after_one = start.step(GenEvent::Sent);
        match after_one {
            GenState::Running(seq) => assert_eq!(seq.current(), 1),
            GenState::Stopped => panic!("one handoff must not stop the generator"),
        }
    }

    #[test]
    fn test_step_cancel_stops_from_running() {
        let running = GenState::Running(FibSequence::new());
        assert_eq!(running.step(GenEvent::Cancelled), GenState::Stopped);
    }

    #[test]
    fn test_stopped_is_terminal() {
        assert_eq!(GenState::Stopped.step(GenEvent::Sent), GenState::Stopped);
        assert_eq!(GenState::Stopped.step(GenEvent::Cancelled), GenState::Stopped);
    }

    #[test]
    fn test_ten_values_then_cancel() {
        let (out_tx, out_rx) = bounded(0);
        let (cancel_tx, cancel_rx) = bounded(0);

        let generator = thread::spawn(move || generate(out_tx, cancel_rx));

        let mut received = vec![];
        for _ in 0..10 {
            received.push(out_rx.recv().unwrap());
        }
        cancel_tx.send(()).unwrap();

        assert_eq!(received, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(generator.join().unwrap(), 10);

        // Once cancelled, a further receive sees a closed channel, never
        // a fabricated value.
        assert!(out_rx.recv().is_err());
    }

    #[test]
    fn test_cancel_before_first_handoff() {
        let (out_tx, out_rx) = bounded(0);
        let (cancel_tx, cancel_rx) = bounded(0);

        let generator = thread::spawn(move || generate(out_tx, cancel_rx));
        cancel_tx.send(()).unwrap();

        assert_eq!(generator.join().unwrap(), 0);
        assert!(out_rx.recv().is_err());
    }

    #[test]
    fn test_consumer_dropping_output_stops_the_stream() {
        let (out_tx, out_rx) = bounded(0);
        let (_cancel_tx, cancel_rx) = bounded(0);

        let generator = thread::spawn(move || generate(out_tx, cancel_rx));

        assert_eq!(out_rx.recv().unwrap(), 0);
        assert_eq!(out_rx.recv().unwrap(), 1);
        drop(out_rx);

        assert_eq!(generator.join().unwrap(), 2);
    }

    #[test]
    fn test_dropped_cancel_sender_stops_the_stream() {
        let (out_tx, out_rx) = bounded(0);
        let (cancel_tx, cancel_rx) = bounded::<()>(0);

        let generator = thread::spawn(move || generate(out_tx, cancel_rx));
        assert_eq!(out_rx.recv().unwrap(), 0);

        // With no cancel sender left the generator winds down on its own:
        // nobody receives again, so only the cancel arm can become ready.
        drop(cancel_tx);
        assert_eq!(generator.join().unwrap(), 1);
    }
}
