//! The run state machine and its transition table.

use super::operation::Operation;
use super::state::RunState;
use crate::core::{StateHistory, StateTransition};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

/// What a transition does to the counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CounterEffect {
    /// Set the counter to zero
    Reset,
    /// Leave the counter alone
    Keep,
    /// Add one to the counter
    Increment,
}

/// Planned outcome of applying an operation in a given state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub from: RunState,
    pub to: RunState,
    pub counter: CounterEffect,
}

impl Step {
    fn new(from: RunState, to: RunState, counter: CounterEffect) -> Self {
        Self { from, to, counter }
    }

    /// Neither the state nor the counter changes.
    pub fn is_noop(&self) -> bool {
        self.from == self.to && self.counter == CounterEffect::Keep
    }

    pub fn changes_state(&self) -> bool {
        self.from != self.to
    }
}

/// The transition table.
///
/// Pure: looks only at the current state and the requested operation.
/// Anything not listed leaves the machine where it is.
pub fn plan(current: RunState, op: Operation) -> Step {
    use CounterEffect::*;
    use Operation::*;
    use RunState::*;

    match (current, op) {
        (Idle | Stopped, Start) => Step::new(current, Running, Reset),
        (Paused, Start) => Step::new(current, Running, Keep),
        (Running, Pause) => Step::new(current, Paused, Keep),
        (Running | Paused, Stop) => Step::new(current, Stopped, Keep),
        (Running, Process) => Step::new(current, Running, Increment),
        _ => Step::new(current, current, Keep),
    }
}

/// Four-state machine with a counter that only advances while running.
///
/// Starts in [`RunState::Idle`] with a value of 0. Every operation is a
/// transition attempt; attempts the table does not allow are logged and
/// otherwise ignored.
///
/// # Example
///
/// ```rust
/// use runstate::{RunState, StateMachine};
///
/// let mut machine = StateMachine::new();
/// machine.start();
/// machine.process();
/// machine.process();
/// machine.pause();
/// machine.process();
///
/// assert_eq!(machine.state(), RunState::Paused);
/// assert_eq!(machine.value(), 2);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct StateMachine {
    state: RunState,
    value: i64,
    history: StateHistory<RunState>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
            value: 0,
            history: StateHistory::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// State changes made so far. No-op calls are not recorded.
    pub fn history(&self) -> &StateHistory<RunState> {
        &self.history
    }

    /// Enter `Running`. Resets the counter unless resuming from `Paused`.
    pub fn start(&mut self) {
        self.apply(Operation::Start);
    }

    /// `Running` -> `Paused`.
    pub fn pause(&mut self) {
        self.apply(Operation::Pause);
    }

    /// `Running` or `Paused` -> `Stopped`.
    pub fn stop(&mut self) {
        self.apply(Operation::Stop);
    }

    /// Advance the counter by one while `Running`.
    pub fn process(&mut self) {
        self.apply(Operation::Process);
    }

    /// Attempt `op` from the current state, logging the state before and after.
    pub fn apply(&mut self, op: Operation) {
        info!(operation = %op, state = %self.state, value = self.value, "before");

        let step = plan(self.state, op);
        debug!(operation = %op, ?step, "planned step");
        if step.is_noop() {
            warn!(
                operation = %op,
                "cannot {} from {}",
                op,
                self.state.as_str().to_lowercase()
            );
        }
        self.commit(step, op);

        info!(operation = %op, state = %self.state, value = self.value, "after");
    }

    fn commit(&mut self, step: Step, op: Operation) {
        match step.counter {
            CounterEffect::Reset => self.value = 0,
            CounterEffect::Keep => {}
            CounterEffect::Increment => self.value = self.value.saturating_add(1),
        }

        if step.changes_state() {
            self.history = self.history.record(StateTransition {
                from: step.from,
                to: step.to,
                trigger: op.name().to_string(),
                timestamp: Utc::now(),
            });
            debug!(
                from = %step.from,
                to = %step.to,
                recorded = self.history.len(),
                "recorded transition"
            );
            self.state = step.to;
        }
    }
}
