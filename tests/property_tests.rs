//! Property-based tests for the run state machine.
//!
//! These tests use proptest to check the transition rules hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use runstate::{Operation, RunState, State, StateMachine, ALL_STATES};

prop_compose! {
    fn arbitrary_operation()(variant in 0..4u8) -> Operation {
        match variant {
            0 => Operation::Start,
            1 => Operation::Pause,
            2 => Operation::Stop,
            _ => Operation::Process,
        }
    }
}

fn replay(ops: &[Operation]) -> StateMachine {
    let mut machine = StateMachine::new();
    for &op in ops {
        machine.apply(op);
    }
    machine
}

proptest! {
    #[test]
    fn state_is_always_one_of_four(ops in prop::collection::vec(arbitrary_operation(), 0..64)) {
        let machine = replay(&ops);
        prop_assert!(ALL_STATES.contains(&machine.state()));
    }

    #[test]
    fn process_counts_iff_running(
        prefix in prop::collection::vec(arbitrary_operation(), 0..32)
    ) {
        let mut machine = replay(&prefix);
        let state = machine.state();
        let before = machine.value();

        machine.process();

        if state == RunState::Running {
            prop_assert_eq!(machine.value(), before + 1);
        } else {
            prop_assert_eq!(machine.value(), before);
        }
        prop_assert_eq!(machine.state(), state);
    }

    #[test]
    fn start_resets_unless_paused(
        prefix in prop::collection::vec(arbitrary_operation(), 0..32)
    ) {
        let mut machine = replay(&prefix);
        let state = machine.state();
        let before = machine.value();

        machine.start();

        prop_assert_eq!(machine.state(), RunState::Running);
        match state {
            RunState::Idle | RunState::Stopped => prop_assert_eq!(machine.value(), 0),
            RunState::Paused | RunState::Running => prop_assert_eq!(machine.value(), before),
        }
    }

    #[test]
    fn pause_only_leaves_running(
        prefix in prop::collection::vec(arbitrary_operation(), 0..32)
    ) {
        let mut machine = replay(&prefix);
        let state = machine.state();
        let before = machine.value();

        machine.pause();

        let expected = if state == RunState::Running { RunState::Paused } else { state };
        prop_assert_eq!(machine.state(), expected);
        prop_assert_eq!(machine.value(), before);
    }

    #[test]
    fn stop_only_leaves_running_or_paused(
        prefix in prop::collection::vec(arbitrary_operation(), 0..32)
    ) {
        let mut machine = replay(&prefix);
        let state = machine.state();
        let before = machine.value();

        machine.stop();

        let expected = match state {
            RunState::Running | RunState::Paused => RunState::Stopped,
            other => other,
        };
        prop_assert_eq!(machine.state(), expected);
        prop_assert_eq!(machine.value(), before);
    }

    #[test]
    fn value_never_negative(ops in prop::collection::vec(arbitrary_operation(), 0..64)) {
        let machine = replay(&ops);
        prop_assert!(machine.value() >= 0);
    }

    #[test]
    fn history_path_ends_at_current_state(
        ops in prop::collection::vec(arbitrary_operation(), 1..64)
    ) {
        let machine = replay(&ops);
        let current = machine.state();
        let history = machine.history();
        let path = history.get_path();

        if history.is_empty() {
            prop_assert_eq!(current, RunState::Idle);
        } else {
            prop_assert_eq!(path[0], &RunState::Idle);
            prop_assert_eq!(path.last().copied(), Some(&current));
        }

        for pair in history.transitions().windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
        for transition in history.transitions() {
            prop_assert_ne!(&transition.from, &transition.to);
        }
    }

    #[test]
    fn operation_names_parse_back(op in arbitrary_operation()) {
        let parsed: Operation = op.name().parse().unwrap();
        prop_assert_eq!(parsed, op);
    }

    #[test]
    fn state_label_contains_name(index in 0..4usize) {
        let state = ALL_STATES[index];
        prop_assert!(state.label().ends_with(state.name()));
    }
}
