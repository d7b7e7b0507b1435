//! Operations a caller can request from the machine.

use super::error::ParseOperationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transition attempt. Each variant maps to one method on
/// [`StateMachine`](super::StateMachine).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Start,
    Pause,
    Stop,
    Process,
}

pub const ALL_OPERATIONS: [Operation; 4] = [
    Operation::Start,
    Operation::Pause,
    Operation::Stop,
    Operation::Process,
];

/// Sequence replayed by the driver when no operations are given.
///
/// Covers a fresh start, counting, pausing (with a rejected process call),
/// resuming with the counter intact, stopping, and restarting with a reset.
pub const DEMO_SEQUENCE: [Operation; 16] = [
    Operation::Start,
    Operation::Process,
    Operation::Process,
    Operation::Process,
    Operation::Pause,
    Operation::Process,
    Operation::Start,
    Operation::Process,
    Operation::Process,
    Operation::Process,
    Operation::Process,
    Operation::Process,
    Operation::Process,
    Operation::Stop,
    Operation::Process,
    Operation::Start,
];

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Start => "start",
            Operation::Pause => "pause",
            Operation::Stop => "stop",
            Operation::Process => "process",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseOperationError::Empty);
        }
        ALL_OPERATIONS
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseOperationError::Unknown(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!("start".parse::<Operation>(), Ok(Operation::Start));
        assert_eq!(" Pause ".parse::<Operation>(), Ok(Operation::Pause));
        assert_eq!("STOP".parse::<Operation>(), Ok(Operation::Stop));
        assert_eq!("process".parse::<Operation>(), Ok(Operation::Process));
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        assert_eq!(
            "resume".parse::<Operation>(),
            Err(ParseOperationError::Unknown("resume".to_string()))
        );
        assert_eq!("  ".parse::<Operation>(), Err(ParseOperationError::Empty));
    }

    #[test]
    fn unknown_error_message_names_the_input() {
        let err = "jump".parse::<Operation>().unwrap_err();
        assert!(err.to_string().contains("'jump'"));
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(
            serde_json::to_string(&Operation::Process).unwrap(),
            "\"process\""
        );
    }
}
