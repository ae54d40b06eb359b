// src/engine/report.rs

//! What happened to each rule during a session.

use std::collections::BTreeMap;

use crate::dag::RuleId;
use crate::engine::RuleOutcome;

/// Read-only view of a single rule's fate in a finished (or stopped) session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleStatus {
    Passed,
    Fixed,
    Failed,
    /// Never executed because `cause` failed upstream.
    Skipped { cause: RuleId },
    /// Not executed at all in this session (unknown rule, or the session
    /// stopped before reaching it).
    NotRun,
}

/// Accumulated result of a [`Session`](super::Session).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Rules in the order they were executed.
    pub order: Vec<RuleId>,
    pub passed: Vec<RuleId>,
    pub fixed: Vec<RuleId>,
    pub failed: Vec<RuleId>,
    /// Rules pruned because something they depend on failed, in the order
    /// they were pruned.
    pub skipped: Vec<RuleId>,
    /// Skipped rule -> the failed rule that pruned it.
    pub skipped_by: BTreeMap<RuleId, RuleId>,
}

impl SessionReport {
    pub(crate) fn record_outcome(&mut self, id: &str, outcome: RuleOutcome) {
        self.order.push(id.to_string());
        match outcome {
            RuleOutcome::Passed => self.passed.push(id.to_string()),
            RuleOutcome::Fixed => self.fixed.push(id.to_string()),
            RuleOutcome::Failed => self.failed.push(id.to_string()),
        }
    }

    pub(crate) fn record_skipped(&mut self, id: &str, cause: &str) {
        self.skipped.push(id.to_string());
        self.skipped_by.insert(id.to_string(), cause.to_string());
    }

    /// Status of `id` in this session.
    pub fn outcome_of(&self, id: &str) -> RuleStatus {
        if let Some(cause) = self.skipped_by.get(id) {
            return RuleStatus::Skipped {
                cause: cause.clone(),
            };
        }
        if self.failed.iter().any(|r| r == id) {
            RuleStatus::Failed
        } else if self.fixed.iter().any(|r| r == id) {
            RuleStatus::Fixed
        } else if self.passed.iter().any(|r| r == id) {
            RuleStatus::Passed
        } else {
            RuleStatus::NotRun
        }
    }

    /// No rule failed and none was skipped.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }

    /// Total number of rules the session dealt with (executed or skipped).
    pub fn handled(&self) -> usize {
        self.order.len() + self.skipped.len()
    }
}
