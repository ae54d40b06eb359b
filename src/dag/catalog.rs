// src/dag/catalog.rs

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::dag::rule::{Rule, RuleId};
use crate::errors::{Result, RulesortError};

/// Immutable catalog of every rule registered for a session.
///
/// Besides the rules themselves this keeps the reverse adjacency (direct
/// dependents) so closure queries do not rescan the whole catalog for each
/// visited rule. Both are derived once from the declared prerequisites and
/// never change afterwards, which is what lets graph clones share it.
#[derive(Debug)]
pub struct RuleCatalog<P> {
    rules: HashMap<RuleId, Arc<Rule<P>>>,
    /// Direct dependents: rules that list the key in their `prereqs`.
    dependents: HashMap<RuleId, Vec<RuleId>>,
}

impl<P> RuleCatalog<P> {
    pub fn build(rules: impl IntoIterator<Item = Rule<P>>) -> Result<Self> {
        let mut by_id: HashMap<RuleId, Arc<Rule<P>>> = HashMap::new();

        for rule in rules {
            if by_id.contains_key(&rule.id) {
                return Err(RulesortError::DuplicateRuleId(rule.id));
            }
            by_id.insert(rule.id.clone(), Arc::new(rule));
        }

        let mut dependents: HashMap<RuleId, Vec<RuleId>> = HashMap::new();
        for rule in by_id.values() {
            for prereq in rule.prereqs.iter() {
                let entry = dependents.entry(prereq.clone()).or_default();
                // A rule listing the same prerequisite twice is still one edge.
                if !entry.contains(&rule.id) {
                    entry.push(rule.id.clone());
                }
            }
        }

        debug!(rules = by_id.len(), "rule catalog built");

        Ok(Self {
            rules: by_id,
            dependents,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Rule<P>>> {
        self.rules.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = &Arc<Rule<P>>> {
        self.rules.values()
    }

    /// Immediate dependents of a rule. Unknown IDs have none.
    pub fn dependents_of(&self, id: &str) -> &[RuleId] {
        self.dependents
            .get(id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }
}
