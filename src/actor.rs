//! Pattern 1 (variant): the same keyed tally, but the map is owned by a
//! single actor thread and every access travels through its command
//! channel instead of a lock.

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;
use std::thread::{self, JoinHandle};

/// Commands the counter actor accepts.
pub enum CounterCommand {
    Increment(String),
    /// Request the count for a key; the reply arrives on the enclosed sender.
    Get(String, Sender<u64>),
    Shutdown,
}

/// Owns the map exclusively; nothing else ever touches it.
pub struct CounterActor {
    inbox: Receiver<CounterCommand>,
    counts: HashMap<String, u64>,
}

impl CounterActor {
    /// Starts the actor thread and hands back its command channel plus
    /// the join handle for a clean shutdown.
    pub fn spawn() -> (Sender<CounterCommand>, JoinHandle<()>) {
        let (tx, rx) = unbounded();
        let actor = CounterActor {
            inbox: rx,
            counts: HashMap::new(),
        };
        let handle = thread::spawn(move || actor.run());
        (tx, handle)
    }

    // The actor's main loop: runs until Shutdown or until every command
    // sender is gone.
    fn run(mut self) {
        while let Ok(cmd) = self.inbox.recv() {
            match cmd {
                CounterCommand::Increment(key) => {
                    *self.counts.entry(key).or_insert(0) += 1;
                }
                CounterCommand::Get(key, reply) => {
                    let count = self.counts.get(&key).copied().unwrap_or(0);
                    reply.send(count).ok(); // requester may have gone away
                }
                CounterCommand::Shutdown => break,
            }
        }
    }
}
