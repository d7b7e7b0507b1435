//! The four run states.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a [`StateMachine`](super::StateMachine) currently is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Every run state, in id order.
pub const ALL_STATES: [RunState; 4] = [
    RunState::Idle,
    RunState::Running,
    RunState::Paused,
    RunState::Stopped,
];

impl RunState {
    /// Stable numeric id, as printed in the state listing.
    pub const fn id(self) -> u8 {
        match self {
            RunState::Idle => 0,
            RunState::Running => 1,
            RunState::Paused => 2,
            RunState::Stopped => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::Running => "Running",
            RunState::Paused => "Paused",
            RunState::Stopped => "Stopped",
        }
    }

    /// Decorated label used in log lines.
    pub const fn decorated(self) -> &'static str {
        match self {
            RunState::Idle => "0\u{fe0f}\u{20e3}  Idle",
            RunState::Running => "1\u{fe0f}\u{20e3}  Running",
            RunState::Paused => "2\u{fe0f}\u{20e3}  Paused",
            RunState::Stopped => "3\u{fe0f}\u{20e3}  Stopped",
        }
    }
}

impl State for RunState {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn label(&self) -> &str {
        self.decorated()
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.decorated())
    }
}
