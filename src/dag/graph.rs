// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::dag::catalog::RuleCatalog;
use crate::dag::rule::{Rule, RuleId};
use crate::errors::Result;

/// Rule dependency graph for one scheduling session.
///
/// Holds two things:
/// - the shared, read-only [`RuleCatalog`] (every rule ever registered)
/// - `remaining`: for each rule still eligible to run, the prerequisites that
///   have not been satisfied yet
///
/// `remaining` only ever shrinks. Its keys are removed when a rule is popped
/// for execution, marked satisfied via [`RuleGraph::remove`], or pruned via
/// [`RuleGraph::pop_dependent_rules`]; nothing re-adds them.
///
/// Scheduling operations live in `dag::scheduler`, closure queries in
/// `dag::dependents`.
#[derive(Debug)]
pub struct RuleGraph<P = ()> {
    pub(crate) catalog: Arc<RuleCatalog<P>>,
    pub(crate) remaining: BTreeMap<RuleId, BTreeSet<RuleId>>,
}

impl<P> RuleGraph<P> {
    /// Build a graph from a finite rule list.
    ///
    /// Every rule starts with its full declared prerequisite set. Fails with
    /// `DuplicateRuleId` if two rules share an ID.
    pub fn new(rules: impl IntoIterator<Item = Rule<P>>) -> Result<Self> {
        let catalog = RuleCatalog::build(rules)?;

        let remaining = catalog
            .rules()
            .map(|rule| {
                (
                    rule.id.clone(),
                    rule.prereqs.iter().cloned().collect::<BTreeSet<_>>(),
                )
            })
            .collect();

        Ok(Self {
            catalog: Arc::new(catalog),
            remaining,
        })
    }

    /// Catalog lookup. Does not consult the scheduling state, so rules that
    /// were already popped or pruned are still found.
    pub fn get(&self, id: &str) -> Option<&Arc<Rule<P>>> {
        self.catalog.get(id)
    }

    /// True once every rule has been popped, marked satisfied or pruned.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of rules in the catalog.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Number of rules still waiting to be scheduled.
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether `id` is still waiting to be scheduled.
    pub fn is_scheduled(&self, id: &str) -> bool {
        self.remaining.contains_key(id)
    }

    /// Prerequisites of `id` that are not satisfied yet, or `None` if the
    /// rule is no longer (or never was) waiting to be scheduled.
    pub fn remaining_prerequisites(&self, id: &str) -> Option<&BTreeSet<RuleId>> {
        self.remaining.get(id)
    }

    /// IDs of every rule still waiting, in ascending order.
    ///
    /// After a `DependencyCycle` this is the set of rules that could never run.
    pub fn blocked_rules(&self) -> Vec<RuleId> {
        self.remaining.keys().cloned().collect()
    }

    /// All rule IDs in the catalog, in no particular order.
    pub fn rule_ids(&self) -> impl Iterator<Item = &str> {
        self.catalog.rules().map(|r| r.id.as_str())
    }
}

/// Independent copy for a separate evaluation.
///
/// The catalog is shared (rules are read-only); the remaining-prerequisite
/// map is deep-copied, so mutating one graph never affects the other.
impl<P> Clone for RuleGraph<P> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            remaining: self.remaining.clone(),
        }
    }
}
