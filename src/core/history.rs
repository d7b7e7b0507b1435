//! State transition history tracking.
//!
//! A history is an append-only trail of the state changes a machine went
//! through during one run. It lives in memory only.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use runstate::core::StateTransition;
/// use runstate::RunState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: RunState::Idle,
///     to: RunState::Running,
///     trigger: "start".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, "start");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the operation that caused the change
    pub trigger: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable: [`StateHistory::record`] returns a new history
/// with the transition appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use runstate::core::{StateHistory, StateTransition};
/// use runstate::RunState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: RunState::Idle,
///         to: RunState::Running,
///         trigger: "start".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: RunState::Running,
///         to: RunState::Stopped,
///         trigger: "stop".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&RunState::Idle, &RunState::Running, &RunState::Stopped]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// The first element is the `from` state of the first record, followed
    /// by the `to` state of every record. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last recorded transitions.
    ///
    /// `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// All transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
