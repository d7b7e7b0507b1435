//! Core state machine types.
//!
//! This module holds the parts that do not depend on a particular machine:
//! - State definitions via the `State` trait
//! - Immutable history tracking

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
