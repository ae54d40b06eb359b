#![allow(dead_code)]

use std::collections::BTreeMap;

use rulesort::config::{RawRuleSetConfig, RuleSetConfig, RuleSpec};
use rulesort::dag::{Rule, RuleGraph};

/// Builder for rule lists / graphs to simplify test setup.
///
/// ```ignore
/// let graph = RuleSetBuilder::new()
///     .rule("A", &[])
///     .rule("B", &["A"])
///     .graph();
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<(String, Vec<String>)>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, id: &str, prereqs: &[&str]) -> Self {
        self.rules.push((
            id.to_string(),
            prereqs.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }

    /// Linear chain: each rule requires the previous one.
    pub fn chain(mut self, ids: &[&str]) -> Self {
        let mut prev: Option<&str> = None;
        for &id in ids {
            let prereqs = prev.map(|p| vec![p.to_string()]).unwrap_or_default();
            self.rules.push((id.to_string(), prereqs));
            prev = Some(id);
        }
        self
    }

    pub fn rules(self) -> Vec<Rule> {
        self.rules
            .into_iter()
            .map(|(id, prereqs)| Rule::new(id, prereqs, ()))
            .collect()
    }

    pub fn graph(self) -> RuleGraph {
        RuleGraph::new(self.rules()).expect("Failed to build graph from builder")
    }

    pub fn raw_config(self) -> RawRuleSetConfig {
        let mut rule = BTreeMap::new();
        for (id, prereqs) in self.rules {
            rule.insert(
                id.clone(),
                RuleSpec {
                    description: Some(format!("rule {id}")),
                    prereqs,
                },
            );
        }
        RawRuleSetConfig { rule }
    }

    pub fn config(self) -> RuleSetConfig {
        RuleSetConfig::try_from(self.raw_config())
            .expect("Failed to build valid rule set from builder")
    }
}

/// Drain a graph with `pop_next_available`, treating every rule as passed.
pub fn drain_order<P>(graph: &mut RuleGraph<P>) -> Vec<String> {
    let mut order = Vec::new();
    while !graph.is_empty() {
        let rule = graph
            .pop_next_available()
            .expect("graph should not contain a cycle");
        graph.remove(&rule.id);
        order.push(rule.id.clone());
    }
    order
}

/// Position of every ID in `order`.
pub fn positions(order: &[String]) -> BTreeMap<String, usize> {
    order
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i))
        .collect()
}
