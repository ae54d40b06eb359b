use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rulesort::dag::Rule;
use rulesort::engine::{RuleExecutor, RuleOutcome};

/// An executor that:
/// - records which rules were executed, in order
/// - returns a scripted outcome per rule (default `Passed`).
///
/// Clones share the same record, so a test can hand a clone to a session
/// (or to several sessions) and inspect the log afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    outcomes: HashMap<String, RuleOutcome>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, id: &str) -> Self {
        self.outcomes.insert(id.to_string(), RuleOutcome::Failed);
        self
    }

    pub fn fixing(mut self, id: &str) -> Self {
        self.outcomes.insert(id.to_string(), RuleOutcome::Fixed);
        self
    }

    /// Fresh record with the same scripted outcomes.
    pub fn detached(&self) -> Self {
        Self {
            outcomes: self.outcomes.clone(),
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl<P> RuleExecutor<P> for RecordingExecutor {
    fn execute(&mut self, rule: &Rule<P>) -> RuleOutcome {
        self.executed.lock().unwrap().push(rule.id.clone());
        self.outcomes
            .get(&rule.id)
            .copied()
            .unwrap_or(RuleOutcome::Passed)
    }
}
