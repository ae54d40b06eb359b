// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::dag::{Rule, RuleId};

/// Rule set exactly as read from a TOML file, before validation.
///
/// ```toml
/// [rule.namespace-exists]
/// description = "target namespace exists"
///
/// [rule.deployment-selector]
/// description = "deployment selector matches its pod template"
/// prereqs = ["namespace-exists"]
/// ```
///
/// Use `RuleSetConfig::try_from` (or [`super::load_and_validate`]) to get a
/// checked [`RuleSetConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRuleSetConfig {
    /// All rules from `[rule.<id>]`, keyed by rule ID.
    #[serde(default)]
    pub rule: BTreeMap<RuleId, RuleSpec>,
}

/// `[rule.<id>]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleSpec {
    /// Human readable summary, shown in dry-run and reports.
    #[serde(default)]
    pub description: Option<String>,

    /// Rules that must pass (or be fixed) before this one runs.
    ///
    /// `after = [...]` is accepted as an alias.
    #[serde(default, alias = "after")]
    pub prereqs: Vec<RuleId>,
}

/// A validated rule set: non-empty, every prerequisite refers to a declared
/// rule, and the prerequisites form no cycle.
#[derive(Debug, Clone)]
pub struct RuleSetConfig {
    rules: BTreeMap<RuleId, RuleSpec>,
}

impl RuleSetConfig {
    /// Wrap rules that were already validated.
    pub(crate) fn new_unchecked(rules: BTreeMap<RuleId, RuleSpec>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &BTreeMap<RuleId, RuleSpec> {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Turn the rule set into graph input; each rule carries its spec as
    /// payload.
    pub fn into_rules(self) -> Vec<Rule<RuleSpec>> {
        self.rules
            .into_iter()
            .map(|(id, spec)| Rule::new(id, spec.prereqs.clone(), spec))
            .collect()
    }
}
