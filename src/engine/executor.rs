//! The step-by-step execution engine.

use super::acceptance::{AcceptanceEvaluator, Verdict};
use super::configuration::{Configuration, Stack};
use super::resolver::TransitionResolver;
use super::trace::TraceRecorder;
use super::RunResult;
use crate::automaton::{AutomatonDefinition, StackPush, StackTop, Symbol, Transition};
use crate::error::RunFailure;
use tracing::{debug, trace, warn};

/// Where a run currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// More steps may follow.
    Running,
    /// The run cannot continue.
    Stuck(RunFailure),
    /// Halted in an accepting configuration.
    Accepted,
    /// Halted in a non-accepting configuration.
    Rejected,
}

impl RunStatus {
    /// Check if no further step will be taken.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

/// The maximum number of transitions a run over `input_len` symbols may apply.
///
/// Symbol-consuming moves account for at most `input_len` steps; the rest of
/// the budget is headroom for epsilon moves. Cyclic epsilon chains exhaust
/// it and are reported as [`RunFailure::EpsilonLoop`].
#[inline]
pub fn step_bound(input_len: usize) -> usize {
    2 * (input_len + 1)
}

/// Drives one run of a definition over one input.
///
/// Starts `Running` at `(initial_state, 0, [bottom])` and advances one
/// transition per [`step`](Self::step) until the status becomes terminal.
///
/// # Panics
///
/// Applying a transition panics if the stack would lose its bottom marker or
/// be popped while empty. [`AutomatonBuilder`](crate::AutomatonBuilder)
/// rejects every definition that could do this, so a panic here means an
/// engine bug rather than a bad definition or input.
#[derive(Debug)]
pub struct ExecutionEngine<'a> {
    definition: &'a AutomatonDefinition,
    resolver: TransitionResolver<'a>,
    input: Vec<char>,
    configuration: Configuration,
    recorder: TraceRecorder,
    status: RunStatus,
    verdict: Option<Verdict>,
    steps: usize,
    bound: usize,
}

impl<'a> ExecutionEngine<'a> {
    /// Prepare a run of `definition` over `input`.
    pub fn new(definition: &'a AutomatonDefinition, input: &str) -> Self {
        let input: Vec<char> = input.chars().collect();
        let stack = match definition.initial_stack_symbol() {
            Some(bottom) => Stack::with_bottom(bottom.clone()),
            None => Stack::new(),
        };
        let configuration = Configuration::new(definition.initial_state().clone(), 0, stack);
        let recorder = TraceRecorder::new(definition.mode(), &configuration);
        let bound = step_bound(input.len());

        debug!(
            mode = ?definition.mode(),
            input_len = input.len(),
            bound,
            "starting run"
        );

        Self {
            definition,
            resolver: TransitionResolver::new(definition),
            input,
            configuration,
            recorder,
            status: RunStatus::Running,
            verdict: None,
            steps: 0,
            bound,
        }
    }

    /// The current configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The current status.
    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// Number of transitions applied so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advance by at most one transition.
    ///
    /// Does nothing once the status is terminal.
    pub fn step(&mut self) -> &RunStatus {
        if self.status.is_terminal() {
            return &self.status;
        }

        match self.next_move() {
            Err(failure) => self.halt(RunStatus::Stuck(failure)),
            Ok(None) => {
                let verdict =
                    AcceptanceEvaluator::new(self.definition).evaluate(&self.configuration, &self.status);
                let status = if verdict.is_accepted() {
                    RunStatus::Accepted
                } else {
                    RunStatus::Rejected
                };
                self.verdict = Some(verdict);
                self.status = status;
            }
            Ok(Some((transition, consumes))) => {
                if self.steps >= self.bound {
                    warn!(
                        steps = self.steps,
                        state = %self.configuration.state,
                        position = self.configuration.position,
                        "step bound reached, aborting run"
                    );
                    self.halt(RunStatus::Stuck(RunFailure::EpsilonLoop { steps: self.steps }));
                } else {
                    self.apply(transition, consumes);
                }
            }
        }

        &self.status
    }

    /// Step until the status is terminal and return the result.
    pub fn run(mut self) -> RunResult {
        while !self.step().is_terminal() {}

        let verdict = match self.verdict.take() {
            Some(verdict) => verdict,
            None => AcceptanceEvaluator::new(self.definition).evaluate(&self.configuration, &self.status),
        };

        debug!(
            steps = self.steps,
            final_state = %self.configuration.state,
            %verdict,
            "run finished"
        );

        RunResult {
            verdict,
            final_state: self.configuration.state,
            trace: self.recorder.finish(),
        }
    }

    fn halt(&mut self, status: RunStatus) {
        let verdict = AcceptanceEvaluator::new(self.definition).evaluate(&self.configuration, &status);
        self.verdict = Some(verdict);
        self.status = status;
    }

    /// Pick the next transition and whether it consumes input.
    ///
    /// `Ok(None)` means input is exhausted and no epsilon move applies.
    fn next_move(&self) -> Result<Option<(&'a Transition, bool)>, RunFailure> {
        let Configuration {
            state,
            position,
            stack,
        } = &self.configuration;
        let top = stack.top();

        let Some(&c) = self.input.get(*position) else {
            return Ok(self
                .resolver
                .resolve(state, Symbol::EPSILON, top)
                .map(|t| (t, false)));
        };

        if !self.definition.accepts_symbol(c) {
            return Err(RunFailure::InvalidSymbol {
                symbol: c,
                position: *position,
            });
        }

        let symbol = Symbol::new(c);
        if let Some(t) = self.resolver.resolve(state, symbol, top) {
            return Ok(Some((t, true)));
        }

        if self.definition.has_epsilon_moves() {
            if let Some(t) = self.resolver.resolve(state, Symbol::EPSILON, top) {
                return Ok(Some((t, false)));
            }
        }

        Err(RunFailure::NoTransition {
            state: state.clone(),
            position: *position,
            symbol: Some(symbol),
        })
    }

    fn apply(&mut self, transition: &Transition, consumes: bool) {
        let stack = &mut self.configuration.stack;

        if let StackTop::Symbol(expected) = &transition.stack_top {
            let popped = stack.pop();
            assert_eq!(
                popped.as_ref(),
                Some(expected),
                "{transition} popped a symbol it did not match"
            );
        }
        if let StackPush::Symbol(symbol) = &transition.push {
            stack.push(symbol.clone());
        }
        if let Some(bottom) = self.definition.initial_stack_symbol() {
            assert_eq!(
                stack.as_slice().first(),
                Some(bottom),
                "{transition} lost the bottom marker"
            );
        }

        self.configuration.state = transition.target.clone();
        if consumes {
            self.configuration.position += 1;
        }
        self.steps += 1;

        trace!(step = self.steps, %transition, configuration = %self.configuration, "applied");
        self.recorder.record(&self.configuration, transition);
    }
}
