// Channel & Shared-State Concurrency Patterns Library
//
// The pattern modules below are driven by the demo programs in this
// directory (p1_* through p5_*); each module carries its own tests.

pub mod actor;
pub mod counter;
pub mod fan_in;
pub mod generator;
pub mod multiplex;
