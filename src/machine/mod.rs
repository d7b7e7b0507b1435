//! The Idle / Running / Paused / Stopped machine.
//!
//! [`plan`] holds the transition table as a pure function;
//! [`StateMachine`] applies it, owns the counter, and logs every attempt.

mod engine;
mod error;
mod operation;
mod state;

pub use engine::{plan, CounterEffect, StateMachine, Step};
pub use error::ParseOperationError;
pub use operation::{Operation, ALL_OPERATIONS, DEMO_SEQUENCE};
pub use state::{RunState, ALL_STATES};
