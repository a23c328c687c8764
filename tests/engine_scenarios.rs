//! End-to-end runs over hand-built finite-state and pushdown automata

use libautomata::engine::{step_bound, ExecutionEngine, RunStatus};
use libautomata::prelude::*;

fn repetitions_of_01() -> AutomatonDefinition {
    AutomatonBuilder::finite()
        .states(["q0", "q1"])
        .alphabet("01".chars())
        .initial("q0")
        .accepting(["q0"])
        .transition("q0", '0', "q1")
        .transition("q1", '1', "q0")
        .build()
        .unwrap()
}

/// a⁺ bʲ cʲ a*, j > 0
fn abc() -> AutomatonDefinition {
    AutomatonBuilder::pushdown("Z0")
        .states(["q0", "q1", "q2", "q3", "q4", "qf"])
        .alphabet("abc".chars())
        .stack_alphabet(["B"])
        .initial("q0")
        .accepting(["qf"])
        .transition("q0", 'a', "q1")
        .transition("q1", 'a', "q1")
        .stack_transition("q1", 'b', StackTop::Any, "q2", StackPush::symbol("B"))
        .stack_transition("q2", 'b', StackTop::Any, "q2", StackPush::symbol("B"))
        .stack_transition("q2", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
        .stack_transition("q3", 'c', StackTop::symbol("B"), "q3", StackPush::Nothing)
        .transition("q3", 'a', "q4")
        .stack_transition("q3", Symbol::EPSILON, StackTop::symbol("Z0"), "qf", StackPush::symbol("Z0"))
        .transition("q4", 'a', "q4")
        .stack_transition("q4", Symbol::EPSILON, StackTop::symbol("Z0"), "qf", StackPush::symbol("Z0"))
        .build()
        .unwrap()
}

#[test]
fn test_finite_repetitions() {
    let def = repetitions_of_01();

    assert!(run(&def, "").accepted());
    assert!(run(&def, "01").accepted());
    assert!(!run(&def, "0").accepted());
    assert!(!run(&def, "010").accepted());
}

#[test]
fn test_finite_trace_has_no_stack() {
    let def = repetitions_of_01();
    let result = run(&def, "0101");

    assert_eq!(result.trace.len(), 5);
    assert_eq!(result.trace.steps(), 4);
    assert!(result.trace.configurations().all(|c| c.stack.is_empty()));
    let path: Vec<&str> = result.trace.path().iter().map(|s| s.name()).collect();
    assert_eq!(path, vec!["q0", "q1", "q0", "q1", "q0"]);
}

#[test]
fn test_finite_non_accepting_halt() {
    let result = run(&repetitions_of_01(), "0");
    assert_eq!(result.rejection(), Some(&Rejection::NonAccepting));
    assert_eq!(result.final_state.name(), "q1");
}

#[test]
fn test_finite_missing_transition() {
    let result = run(&repetitions_of_01(), "00");
    assert_eq!(
        result.failure(),
        Some(&RunFailure::NoTransition {
            state: State::new("q1"),
            position: 1,
            symbol: Some(Symbol::from('0')),
        })
    );
}

#[test]
fn test_invalid_symbol_reports_position() {
    let result = run(&repetitions_of_01(), "01x");

    assert!(!result.accepted());
    assert_eq!(
        result.failure(),
        Some(&RunFailure::InvalidSymbol {
            symbol: 'x',
            position: 2
        })
    );
    assert_eq!(result.final_state.name(), "q0");
    assert_eq!(result.trace.len(), 3);
}

#[test]
fn test_pushdown_accepts_with_bottom_marker() {
    let result = run(&abc(), "abc");

    assert!(result.accepted());
    assert_eq!(result.final_state.name(), "qf");
    assert_eq!(result.trace.final_stack(), &[StackSymbol::new("Z0")]);
}

#[test]
fn test_pushdown_extra_c_gets_stuck() {
    let result = run(&abc(), "abcc");
    assert!(!result.accepted());
    assert!(matches!(
        result.failure(),
        Some(RunFailure::NoTransition { position: 3, .. })
    ));
}

#[test]
fn test_pushdown_unfinished_input_is_non_accepting() {
    let result = run(&abc(), "ab");
    assert_eq!(result.rejection(), Some(&Rejection::NonAccepting));
    assert_eq!(result.final_state.name(), "q2");
    assert_eq!(
        result.trace.final_stack(),
        &[StackSymbol::new("Z0"), StackSymbol::new("B")]
    );
}

#[test]
fn test_pushdown_residual_stack() {
    // Accepting state reachable with symbols still on the stack
    let def = AutomatonBuilder::pushdown("Z0")
        .states(["p", "f"])
        .alphabet("a".chars())
        .stack_alphabet(["A"])
        .initial("p")
        .accepting(["f"])
        .stack_transition("p", 'a', StackTop::Any, "f", StackPush::symbol("A"))
        .build()
        .unwrap();

    let result = run(&def, "a");
    assert_eq!(result.rejection(), Some(&Rejection::ResidualStack));
    assert_eq!(result.final_state.name(), "f");
}

#[test]
fn test_epsilon_loop_terminates() {
    let def = AutomatonBuilder::finite()
        .states(["loop", "done"])
        .alphabet("0".chars())
        .initial("loop")
        .accepting(["done"])
        .epsilon("loop", "loop")
        .build()
        .unwrap();

    for input in ["", "0", "000"] {
        let result = run(&def, input);
        let bound = step_bound(input.chars().count());
        assert!(matches!(
            result.failure(),
            Some(RunFailure::EpsilonLoop { steps }) if *steps == bound
        ));
        assert_eq!(result.trace.steps(), bound);
    }
}

#[test]
fn test_stepping_matches_run() {
    let def = abc();
    let mut engine = ExecutionEngine::new(&def, "aabbcca");
    let mut stepped = 0;
    while !engine.step().is_terminal() {
        stepped += 1;
    }
    assert_eq!(engine.status(), &RunStatus::Accepted);

    let result = engine.run();
    assert!(result.accepted());
    assert_eq!(result, run(&def, "aabbcca"));
    assert!(stepped <= step_bound(7));
}

#[test]
fn test_definition_errors() {
    let missing_initial = AutomatonBuilder::finite().states(["q0"]).build();
    assert_eq!(missing_initial.unwrap_err(), DefinitionError::MissingInitialState);

    let duplicate = AutomatonBuilder::finite()
        .states(["q0", "q1"])
        .alphabet("0".chars())
        .initial("q0")
        .transition("q0", '0', "q0")
        .transition("q0", '0', "q1")
        .build();
    assert!(matches!(
        duplicate,
        Err(DefinitionError::DuplicateTransition { .. })
    ));

    let unknown_symbol = AutomatonBuilder::finite()
        .states(["q0"])
        .alphabet("0".chars())
        .initial("q0")
        .transition("q0", '1', "q0")
        .build();
    assert!(matches!(
        unknown_symbol,
        Err(DefinitionError::UnknownInputSymbol { .. })
    ));

    let stack_in_finite = AutomatonBuilder::finite()
        .states(["q0"])
        .alphabet("0".chars())
        .initial("q0")
        .stack_transition("q0", '0', StackTop::Any, "q0", StackPush::symbol("X"))
        .build();
    assert!(stack_in_finite.is_err());
}
