// src/engine/mod.rs

//! Execution driver for the rule graph.
//!
//! The graph only decides *what* may run next; this module runs it:
//! - [`executor`] defines the [`RuleExecutor`] seam that actually evaluates
//!   a rule (check its condition, try its fix).
//! - [`session`] owns one graph clone plus an executor and drives the
//!   pop / execute / report loop until the graph is empty.
//! - [`report`] collects what happened to each rule in a session.
//! - [`targets`] fans the same rule set out over several independent
//!   targets, one graph clone and one blocking task per target.

/// Outcome of evaluating a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule's condition already held.
    Passed,
    /// The condition did not hold but the rule's fix made it hold.
    Fixed,
    /// The condition did not hold and could not be fixed. Dependents of
    /// this rule must not run.
    Failed,
}

impl RuleOutcome {
    /// Whether dependents of this rule may run.
    pub fn is_success(self) -> bool {
        matches!(self, RuleOutcome::Passed | RuleOutcome::Fixed)
    }
}

pub mod executor;
pub mod report;
pub mod session;
pub mod targets;

pub use executor::{FnExecutor, RuleExecutor, ScriptedExecutor};
pub use report::{RuleStatus, SessionReport};
pub use session::{Session, SessionStep};
pub use targets::run_per_target;
