//! Built-in automata for a set of classic exercises.
//!
//! Each [`Exercise`] pairs a definition with sample inputs and the verdict
//! expected for each of them, so that the definitions can be checked with
//! [`report::check`](crate::report::check).

use crate::automaton::{AutomatonBuilder, AutomatonDefinition, StackPush, StackTop, Symbol};
use crate::error::Result;

/// A named language together with an automaton that recognizes it.
#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    /// Short identifier, used on the command line
    pub id: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// The language, in set notation
    pub language: &'static str,
    /// Constructor for the definition
    pub build: fn() -> Result<AutomatonDefinition>,
    /// Sample inputs with the expected verdict
    pub cases: &'static [(&'static str, bool)],
}

impl Exercise {
    /// Build a fresh definition for this exercise.
    pub fn definition(&self) -> Result<AutomatonDefinition> {
        (self.build)()
    }
}

static CATALOG: [Exercise; 8] = [
    Exercise {
        id: "l1",
        title: "Repetitions of 01",
        language: "L1 = {(01)ⁿ | n ≥ 0}",
        build: l1,
        cases: &[
            ("", true),
            ("01", true),
            ("0101", true),
            ("010101", true),
            ("0", false),
            ("1", false),
            ("10", false),
            ("010", false),
            ("0110", false),
        ],
    },
    Exercise {
        id: "l2",
        title: "Repetitions of 10",
        language: "L2 = {(10)ⁿ | n ≥ 0}",
        build: l2,
        cases: &[
            ("", true),
            ("10", true),
            ("1010", true),
            ("101010", true),
            ("1", false),
            ("0", false),
            ("01", false),
            ("101", false),
            ("1001", false),
        ],
    },
    Exercise {
        id: "l3",
        title: "Union of L1 and L2",
        language: "L3 = L1 ∪ L2",
        build: l3,
        cases: &[
            ("", true),
            ("01", true),
            ("10", true),
            ("0101", true),
            ("1010", true),
            ("0", false),
            ("011", false),
            ("0110", false),
            ("1001", false),
        ],
    },
    Exercise {
        id: "regex",
        title: "Regular expression",
        language: "(((0+10)(10)*(11+0))+11)(0+1)*",
        build: regex,
        cases: &[
            ("00", true),
            ("011", true),
            ("110", true),
            ("111", true),
            ("10100", true),
            ("101011", true),
            ("1001", true),
            ("0110", true),
            ("", false),
            ("0", false),
            ("1", false),
            ("01", false),
            ("10", false),
            ("101", false),
            ("010101", false),
        ],
    },
    Exercise {
        id: "table",
        title: "Transition table",
        language: "four-state DFA over {0, 1} with accepting {q2, q3}",
        build: table,
        cases: &[
            ("01", true),
            ("1", true),
            ("10", true),
            ("011", true),
            ("0101", true),
            ("", false),
            ("0", false),
            ("00", false),
            ("010", false),
        ],
    },
    Exercise {
        id: "even-a",
        title: "Even a's without bc",
        language: "{w ∈ {a, b, c}* | #a(w) even, bc not a substring of w}",
        build: even_a,
        cases: &[
            ("", true),
            ("aa", true),
            ("cb", true),
            ("aab", true),
            ("abab", true),
            ("baca", true),
            ("a", false),
            ("bc", false),
            ("abca", false),
            ("cbba", false),
            ("aabcaa", false),
        ],
    },
    Exercise {
        id: "parity",
        title: "Counting zeros and ones",
        language: "no 1 and even 0s, or odd 1s and even 0s, or even 1s (> 0) and odd 0s",
        build: parity,
        cases: &[
            ("", true),
            ("00", true),
            ("1", true),
            ("110", true),
            ("011", true),
            ("100", true),
            ("0", false),
            ("10", false),
            ("11", false),
            ("1100", false),
        ],
    },
    Exercise {
        id: "abc",
        title: "Pushdown a⁺bⁿcⁿa*",
        language: "{aⁱbʲcᵏaˡ | i > 0, j > 0, k = j, l ≥ 0}",
        build: abc,
        cases: &[
            ("abc", true),
            ("abca", true),
            ("aabbcc", true),
            ("abbcca", true),
            ("aabbccaa", true),
            ("abbbccc", true),
            ("aaabbbcccaaa", true),
            ("", false),
            ("a", false),
            ("ab", false),
            ("ac", false),
            ("bc", false),
            ("abcc", false),
            ("abbc", false),
            ("abcab", false),
        ],
    },
];

/// All exercises, in presentation order.
pub fn catalog() -> &'static [Exercise] {
    &CATALOG
}

/// Look up an exercise by id (case-insensitive).
pub fn find(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.id.eq_ignore_ascii_case(id))
}

/// Identifiers of every exercise.
pub fn ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|e| e.id)
}

fn l1() -> Result<AutomatonDefinition> {
    AutomatonBuilder::finite()
        .states(["q0", "q1", "q2"])
        .alphabet("01".chars())
        .initial("q0")
        .accepting(["q0"])
        .transition("q0", '0', "q1")
        .transition("q0", '1', "q2")
        .transition("q1", '0', "q2")
        .transition("q1", '1', "q0")
        .transition("q2", '0', "q2")
        .transition("q2", '1', "q2")
        .build()
}

fn l2() -> Result<AutomatonDefinition> {
    AutomatonBuilder::finite()
        .states(["p0", "p1", "p2"])
        .alphabet("01".chars())
        .initial("p0")
        .accepting(["p0"])
        .transition("p0", '0', "p2")
        .transition("p0", '1', "p1")
        .transition("p1", '0', "p0")
        .transition("p1", '1', "p2")
        .transition("p2", '0', "p2")
        .transition("p2", '1', "p2")
        .build()
}

/// Product-free union: after the first symbol the run commits to the L1
/// branch (r1, r2) or the L2 branch (r3, r4).
fn l3() -> Result<AutomatonDefinition> {
    AutomatonBuilder::finite()
        .states(["r0", "r1", "r2", "r3", "r4", "r5"])
        .alphabet("01".chars())
        .initial("r0")
        .accepting(["r0", "r2", "r4"])
        .transition("r0", '0', "r1")
        .transition("r0", '1', "r3")
        .transition("r1", '0', "r5")
        .transition("r1", '1', "r2")
        .transition("r2", '0', "r1")
        .transition("r2", '1', "r5")
        .transition("r3", '0', "r4")
        .transition("r3", '1', "r5")
        .transition("r4", '0', "r5")
        .transition("r4", '1', "r3")
        .transition("r5", '0', "r5")
        .transition("r5", '1', "r5")
        .build()
}

fn regex() -> Result<AutomatonDefinition> {
    // q1: inside (0+10)(10)*, q2: read a leading 1, q3: read 1 after q1
    AutomatonBuilder::finite()
        .states(["q0", "q1", "q2", "q3", "q4"])
        .alphabet("01".chars())
        .initial("q0")
        .accepting(["q4"])
        .transition("q0", '0', "q1")
        .transition("q0", '1', "q2")
        .transition("q1", '0', "q4")
        .transition("q1", '1', "q3")
        .transition("q2", '0', "q1")
        .transition("q2", '1', "q4")
        .transition("q3", '0', "q1")
        .transition("q3", '1', "q4")
        .transition("q4", '0', "q4")
        .transition("q4", '1', "q4")
        .build()
}

fn table() -> Result<AutomatonDefinition> {
    AutomatonBuilder::finite()
        .states(["q0", "q1", "q2", "q3"])
        .alphabet("01".chars())
        .initial("q0")
        .accepting(["q2", "q3"])
        .transition("q0", '0', "q1")
        .transition("q0", '1', "q3")
        .transition("q1", '1', "q2")
        .transition("q2", '1', "q2")
        .transition("q2", '0', "q1")
        .transition("q3", '0', "q2")
        .transition("q3", '1', "q3")
        .build()
}

fn even_a() -> Result<AutomatonDefinition> {
    let mut builder = AutomatonBuilder::finite()
        .states(["even", "even_b", "odd", "odd_b", "trap"])
        .alphabet("abc".chars())
        .initial("even")
        .accepting(["even", "even_b"]);

    for (state, flipped, with_b) in [
        ("even", "odd", "even_b"),
        ("even_b", "odd", "even_b"),
        ("odd", "even", "odd_b"),
        ("odd_b", "even", "odd_b"),
    ] {
        let after_c = if state.ends_with("_b") { "trap" } else { state };
        builder = builder
            .transition(state, 'a', flipped)
            .transition(state, 'b', with_b)
            .transition(state, 'c', after_c);
    }

    builder
        .transition("trap", 'a', "trap")
        .transition("trap", 'b', "trap")
        .transition("trap", 'c', "trap")
        .build()
}

/// States track (ones: none / odd / even > 0) × (zeros: even / odd).
fn parity() -> Result<AutomatonDefinition> {
    AutomatonBuilder::finite()
        .states(["q0", "q1", "q2", "q3", "q4", "q5"])
        .alphabet("01".chars())
        .initial("q0")
        .accepting(["q0", "q2", "q5"])
        .transition("q0", '0', "q1")
        .transition("q1", '0', "q0")
        .transition("q2", '0', "q3")
        .transition("q3", '0', "q2")
        .transition("q4", '0', "q5")
        .transition("q5", '0', "q4")
        .transition("q0", '1', "q2")
        .transition("q1", '1', "q3")
        .transition("q2", '1', "q4")
        .transition("q3", '1', "q5")
        .transition("q4", '1', "q2")
        .transition("q5", '1', "q3")
        .build()
}

fn abc() -> Result<AutomatonDefinition> {
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
}
