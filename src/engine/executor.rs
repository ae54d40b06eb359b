// src/engine/executor.rs

//! Pluggable rule evaluation.
//!
//! A [`Session`](super::Session) talks to a `RuleExecutor` instead of
//! knowing what a rule checks or fixes. The CLI plugs in a simulated
//! executor; tests plug in scripted ones that record what was run.

use std::collections::BTreeSet;

use crate::dag::{Rule, RuleId};
use crate::engine::RuleOutcome;

/// Trait abstracting how a popped rule is evaluated.
///
/// The implementation is free to:
/// - check a condition against some target resource and try a fix
/// - simulate an outcome (planning, tests)
///
/// It is called at most once per rule per session, and only after every
/// prerequisite of that rule has passed or been fixed.
pub trait RuleExecutor<P> {
    fn execute(&mut self, rule: &Rule<P>) -> RuleOutcome;
}

/// Executor with predetermined outcomes: rules in `failing` fail, rules in
/// `fixing` are fixed, everything else passes.
///
/// Used by the CLI to play through "what if this rule fails" scenarios.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExecutor {
    failing: BTreeSet<RuleId>,
    fixing: BTreeSet<RuleId>,
}

impl ScriptedExecutor {
    pub fn new<I, J>(failing: I, fixing: J) -> Self
    where
        I: IntoIterator<Item = RuleId>,
        J: IntoIterator<Item = RuleId>,
    {
        Self {
            failing: failing.into_iter().collect(),
            fixing: fixing.into_iter().collect(),
        }
    }

    pub fn outcome_for(&self, id: &str) -> RuleOutcome {
        if self.failing.contains(id) {
            RuleOutcome::Failed
        } else if self.fixing.contains(id) {
            RuleOutcome::Fixed
        } else {
            RuleOutcome::Passed
        }
    }
}

impl<P> RuleExecutor<P> for ScriptedExecutor {
    fn execute(&mut self, rule: &Rule<P>) -> RuleOutcome {
        self.outcome_for(&rule.id)
    }
}

/// Adapter turning a closure into a [`RuleExecutor`].
#[derive(Debug, Clone)]
pub struct FnExecutor<F>(pub F);

impl<P, F> RuleExecutor<P> for FnExecutor<F>
where
    F: FnMut(&Rule<P>) -> RuleOutcome,
{
    fn execute(&mut self, rule: &Rule<P>) -> RuleOutcome {
        (self.0)(rule)
    }
}

impl<P, E> RuleExecutor<P> for Box<E>
where
    E: RuleExecutor<P> + ?Sized,
{
    fn execute(&mut self, rule: &Rule<P>) -> RuleOutcome {
        (**self).execute(rule)
    }
}
