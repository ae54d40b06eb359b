// src/dag/scheduler.rs

//! Kahn-style scheduling on top of [`RuleGraph`].
//!
//! The driver loop looks like:
//!
//! 1. `pop_next_available()` to get a ready rule
//! 2. execute it
//! 3. on success `remove(id)`, on failure `pop_dependent_rules(id)`
//!
//! until `is_empty()`.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::dag::graph::RuleGraph;
use crate::dag::rule::Rule;
use crate::errors::{Result, RulesortError};

impl<P> RuleGraph<P> {
    /// Take the next rule whose prerequisites are all satisfied.
    ///
    /// Ties are broken by lowest rule ID. The selected rule is removed from
    /// the scheduling state and from the pending prerequisites of its
    /// dependents before it is returned.
    ///
    /// Fails with `DependencyCycle` when rules remain but none of them is
    /// ready, and with `Exhausted` when nothing remains at all.
    pub fn pop_next_available(&mut self) -> Result<Arc<Rule<P>>> {
        if self.remaining.is_empty() {
            return Err(RulesortError::Exhausted);
        }

        let ready = self
            .remaining
            .iter()
            .find(|(_, pending)| pending.is_empty())
            .map(|(id, _)| id.clone());

        let Some(id) = ready else {
            let blocked = self.blocked_rules();
            error!(
                ?blocked,
                "no rule is ready: dependency cycle or missing prerequisite"
            );
            return Err(RulesortError::DependencyCycle { blocked });
        };

        self.release(&id);
        self.remaining.remove(&id);

        // `remaining` keys are always a subset of the catalog.
        let rule = self.catalog.get(&id).cloned().ok_or_else(|| {
            RulesortError::Other(anyhow::anyhow!("rule '{id}' missing from catalog"))
        })?;

        debug!(rule = %id, remaining = self.remaining.len(), "popped next available rule");
        Ok(rule)
    }

    /// Mark `id` as satisfied without scheduling it.
    ///
    /// Drops the rule from the scheduling state (if present) and unblocks
    /// every dependent waiting on it. The catalog is untouched.
    ///
    /// `id` does not have to be a registered rule: rules listing an
    /// undeclared prerequisite are unblocked when that ID is removed.
    pub fn remove(&mut self, id: &str) {
        if !self.catalog.contains(id) {
            warn!(rule = %id, "remove called for rule not in catalog");
        }

        self.remaining.remove(id);
        self.release(id);
        debug!(rule = %id, "rule marked satisfied");
    }

    /// Withdraw every dependent of a failed rule from scheduling.
    ///
    /// Returns the dependents this call actually withdrew, in ascending ID
    /// order, so the caller can report them as skipped. Dependents that had
    /// already been popped or pruned are left out. The failed rule itself is
    /// not touched.
    pub fn pop_dependent_rules(&mut self, id: &str) -> Vec<Arc<Rule<P>>> {
        let mut pruned = Vec::new();

        for rule in self.get_dependent_rules(id) {
            if self.remaining.remove(&rule.id).is_some() {
                debug!(rule = %rule.id, failed = %id, "pruned dependent of failed rule");
                pruned.push(rule);
            }
        }

        pruned
    }

    /// Remove `id` from the pending prerequisites of all its dependents that
    /// are still waiting.
    fn release(&mut self, id: &str) {
        for dependent in self.get_dependents(id) {
            if let Some(pending) = self.remaining.get_mut(&dependent) {
                pending.remove(id);
            }
        }
    }
}
