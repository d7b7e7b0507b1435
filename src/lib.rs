//! Runstate: a small run/pause/stop state machine
//!
//! A [`StateMachine`] moves between four states and keeps an integer
//! counter that only advances while it is running. Every operation is a
//! transition attempt: moves the table does not allow leave the machine
//! unchanged and produce an advisory log line instead of an error.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **History**: Immutable tracking of state transitions over one run
//! - **Machine**: The Idle / Running / Paused / Stopped transition table
//!
//! | Operation | Idle | Running | Paused | Stopped |
//! |---|---|---|---|---|
//! | `start` | Running, value = 0 | - | Running | Running, value = 0 |
//! | `pause` | - | Paused | - | - |
//! | `stop` | - | Stopped | Stopped | - |
//! | `process` | - | value + 1 | - | - |
//!
//! Logging goes through `tracing`; install a subscriber to see it.
//!
//! # Example
//!
//! ```rust
//! use runstate::{RunState, StateMachine};
//!
//! let mut machine = StateMachine::new();
//! machine.start();
//! machine.process();
//! machine.stop();
//! machine.start();
//!
//! assert_eq!(machine.state(), RunState::Running);
//! assert_eq!(machine.value(), 0);
//! assert_eq!(machine.history().len(), 3);
//! ```

pub mod core;
pub mod machine;

// Re-export commonly used types
pub use self::core::{State, StateHistory, StateTransition};
pub use machine::{
    plan, Operation, ParseOperationError, RunState, StateMachine, ALL_STATES, DEMO_SEQUENCE,
};
