// src/dag/dependents.rs

//! Dependent-closure queries over the declared prerequisites.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::dag::graph::RuleGraph;
use crate::dag::rule::{Rule, RuleId};

impl<P> RuleGraph<P> {
    /// Every rule that requires `id`, directly or through a chain of
    /// declared prerequisites.
    ///
    /// This walks the static catalog, not the scheduling state: it answers
    /// "who depends on this rule, ever". Rules that were already popped or
    /// pruned are included. Diamonds are collapsed (each rule appears once)
    /// and `id` itself is never part of the result, even inside a cycle.
    pub fn get_dependents(&self, id: &str) -> BTreeSet<RuleId> {
        let mut found: BTreeSet<RuleId> = BTreeSet::new();
        let mut stack: Vec<&str> = vec![id];

        while let Some(current) = stack.pop() {
            for dependent in self.catalog.dependents_of(current) {
                if dependent == id {
                    continue;
                }
                if found.insert(dependent.clone()) {
                    stack.push(dependent.as_str());
                }
            }
        }

        found
    }

    /// Rule objects for [`RuleGraph::get_dependents`], in ascending ID order.
    pub fn get_dependent_rules(&self, id: &str) -> Vec<Arc<Rule<P>>> {
        self.get_dependents(id)
            .iter()
            .filter_map(|dep| self.catalog.get(dep).cloned())
            .collect()
    }
}
