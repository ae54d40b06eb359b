// src/engine/session.rs

//! Sequential driver loop over one rule graph.

use std::fmt;

use tracing::{debug, info, warn};

use crate::dag::{RuleGraph, RuleId};
use crate::engine::executor::RuleExecutor;
use crate::engine::report::SessionReport;
use crate::engine::RuleOutcome;
use crate::errors::Result;

/// Structured result of a single session step.
///
/// Useful for callers (and tests) that want to drive the graph manually and
/// look at what changed after each rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStep {
    /// The rule that was executed.
    pub rule: RuleId,
    pub outcome: RuleOutcome,
    /// Dependents withdrawn from scheduling because `rule` failed.
    pub skipped: Vec<RuleId>,
}

/// One scheduling session: a graph plus the executor evaluating its rules.
///
/// The session owns its graph. To evaluate the same rule set several times
/// (e.g. once per target resource) give each session its own
/// [`RuleGraph::clone`].
pub struct Session<P, E> {
    label: String,
    graph: RuleGraph<P>,
    executor: E,
    report: SessionReport,
}

impl<P, E> fmt::Debug for Session<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("label", &self.label)
            .field("remaining", &self.graph.remaining_len())
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

impl<P, E> Session<P, E>
where
    E: RuleExecutor<P>,
{
    pub fn new(graph: RuleGraph<P>, executor: E) -> Self {
        Self {
            label: "default".to_string(),
            graph,
            executor,
            report: SessionReport::default(),
        }
    }

    /// Name used in log lines, typically the target being evaluated.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current scheduling state (for diagnostics and tests).
    pub fn graph(&self) -> &RuleGraph<P> {
        &self.graph
    }

    /// What has happened so far.
    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    pub fn into_report(self) -> SessionReport {
        self.report
    }

    /// Pop one ready rule, execute it and feed the outcome back.
    ///
    /// - `Passed` / `Fixed`: the rule is marked satisfied.
    /// - `Failed`: every dependent still waiting is pruned and recorded as
    ///   skipped.
    ///
    /// Returns `Ok(None)` once nothing is left to schedule. A dependency
    /// cycle is returned as an error and leaves the graph untouched, so
    /// [`RuleGraph::blocked_rules`] still shows what could not run.
    pub fn step(&mut self) -> Result<Option<SessionStep>> {
        if self.graph.is_empty() {
            return Ok(None);
        }

        let rule = self.graph.pop_next_available()?;
        let outcome = self.executor.execute(&rule);
        self.report.record_outcome(&rule.id, outcome);

        let mut skipped = Vec::new();

        if outcome.is_success() {
            debug!(session = %self.label, rule = %rule.id, ?outcome, "rule succeeded");
            self.graph.remove(&rule.id);
        } else {
            for dependent in self.graph.pop_dependent_rules(&rule.id) {
                self.report.record_skipped(&dependent.id, &rule.id);
                skipped.push(dependent.id.clone());
            }
            warn!(
                session = %self.label,
                rule = %rule.id,
                ?skipped,
                "rule failed; skipping its dependents"
            );
        }

        Ok(Some(SessionStep {
            rule: rule.id.clone(),
            outcome,
            skipped,
        }))
    }

    /// Drive the session until every rule has been executed or skipped.
    pub fn run(mut self) -> Result<SessionReport> {
        info!(
            session = %self.label,
            rules = self.graph.remaining_len(),
            "session started"
        );

        while self.step()?.is_some() {}

        info!(
            session = %self.label,
            passed = self.report.passed.len(),
            fixed = self.report.fixed.len(),
            failed = self.report.failed.len(),
            skipped = self.report.skipped.len(),
            "session finished"
        );

        Ok(self.report)
    }
}
