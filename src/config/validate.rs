// src/config/validate.rs

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graphmap::DiGraphMap;
use tracing::error;

use crate::config::model::{RawRuleSetConfig, RuleSetConfig};
use crate::dag::RuleId;
use crate::errors::{Result, RulesortError};

impl TryFrom<RawRuleSetConfig> for RuleSetConfig {
    type Error = RulesortError;

    fn try_from(raw: RawRuleSetConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(RuleSetConfig::new_unchecked(raw.rule))
    }
}

fn validate_raw_config(cfg: &RawRuleSetConfig) -> Result<()> {
    ensure_has_rules(cfg)?;
    validate_prereq_references(cfg)?;
    validate_acyclic(cfg)?;
    Ok(())
}

fn ensure_has_rules(cfg: &RawRuleSetConfig) -> Result<()> {
    if cfg.rule.is_empty() {
        return Err(RulesortError::ConfigError(
            "rule set must contain at least one [rule.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_prereq_references(cfg: &RawRuleSetConfig) -> Result<()> {
    for (id, rule) in cfg.rule.iter() {
        for prereq in rule.prereqs.iter() {
            if prereq == id {
                return Err(RulesortError::ConfigError(format!(
                    "rule '{}' cannot list itself in `prereqs`",
                    id
                )));
            }
            if !cfg.rule.contains_key(prereq) {
                return Err(RulesortError::ConfigError(format!(
                    "rule '{}' has unknown prerequisite '{}' in `prereqs`",
                    id, prereq
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(cfg: &RawRuleSetConfig) -> Result<()> {
    // Edge direction: prereq -> rule
    // For:
    //   [rule.B]
    //   prereqs = ["A"]
    // we add edge A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in cfg.rule.keys() {
        graph.add_node(id.as_str());
    }

    for (id, rule) in cfg.rule.iter() {
        for prereq in rule.prereqs.iter() {
            graph.add_edge(prereq.as_str(), id.as_str(), ());
        }
    }

    if toposort(&graph, None).is_ok() {
        return Ok(());
    }

    // Self-references were rejected above, so every cycle is a strongly
    // connected component with more than one member.
    let mut blocked: Vec<RuleId> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .flatten()
        .map(|id| id.to_string())
        .collect();
    blocked.sort();

    error!(?blocked, "prerequisite cycle in rule set");
    Err(RulesortError::DependencyCycle { blocked })
}
