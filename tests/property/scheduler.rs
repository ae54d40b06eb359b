use std::collections::{BTreeMap, BTreeSet, HashSet};

use proptest::prelude::*;
use rulesort::dag::{Rule, RuleGraph};
use rulesort::engine::{RuleStatus, Session};
use rulesort_test_utils::builders::positions;
use rulesort_test_utils::recording_executor::RecordingExecutor;

// Strategy to generate an acyclic rule set.
// Acyclicity is guaranteed by only letting rule N require rules 0..N-1.
fn dag_rules_strategy(max_rules: usize) -> impl Strategy<Value = Vec<Rule>> {
    (1..=max_rules).prop_flat_map(|num_rules| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_rules),
            num_rules,
        );

        deps_strat.prop_map(move |raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential_deps)| {
                    let valid: BTreeSet<String> = if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential_deps
                            .into_iter()
                            .map(|d| format!("rule_{}", d % i))
                            .collect()
                    };
                    Rule::new(format!("rule_{i}"), valid.into_iter().collect(), ())
                })
                .collect()
        })
    })
}

/// Brute-force transitive dependents, straight from the declarations.
fn naive_dependents(rules: &[Rule], id: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut frontier = vec![id.to_string()];
    while let Some(current) = frontier.pop() {
        for rule in rules {
            if rule.requires(&current) && found.insert(rule.id.clone()) {
                frontier.push(rule.id.clone());
            }
        }
    }
    found
}

proptest! {
    #[test]
    fn pop_order_is_topological(rules in dag_rules_strategy(12)) {
        let declared: BTreeMap<String, Vec<String>> = rules
            .iter()
            .map(|r| (r.id.clone(), r.prereqs.clone()))
            .collect();
        let mut graph = RuleGraph::new(rules).unwrap();

        let mut order = Vec::new();
        while !graph.is_empty() {
            let rule = graph.pop_next_available().unwrap();
            order.push(rule.id.clone());
        }

        prop_assert_eq!(order.len(), declared.len());
        let pos = positions(&order);
        for (id, prereqs) in declared.iter() {
            for prereq in prereqs {
                prop_assert!(pos[prereq] < pos[id], "{} ran before its prerequisite {}", id, prereq);
            }
        }
    }

    #[test]
    fn dependents_match_brute_force(rules in dag_rules_strategy(12), pick in any::<usize>()) {
        let target = rules[pick % rules.len()].id.clone();
        let expected = naive_dependents(&rules, &target);
        let graph = RuleGraph::new(rules).unwrap();

        prop_assert_eq!(graph.get_dependents(&target), expected);
    }

    #[test]
    fn session_accounts_for_every_rule(
        rules in dag_rules_strategy(12),
        failing in proptest::collection::vec(0..12usize, 0..4),
    ) {
        let ids: Vec<String> = rules.iter().map(|r| r.id.clone()).collect();
        let failing: HashSet<String> = failing
            .into_iter()
            .filter(|&i| i < ids.len())
            .map(|i| ids[i].clone())
            .collect();

        let mut executor = RecordingExecutor::new();
        for id in failing.iter() {
            executor = executor.failing(id);
        }

        let graph = RuleGraph::new(rules).unwrap();
        let shadow = graph.clone();
        let report = Session::new(graph, executor.clone()).run().unwrap();

        // Every rule is executed or skipped exactly once.
        prop_assert_eq!(report.handled(), ids.len());
        let mut seen: HashSet<&String> = report.order.iter().collect();
        for id in report.skipped.iter() {
            prop_assert!(seen.insert(id), "{} both ran and was skipped", id);
        }

        // Nothing downstream of a failure was executed.
        for failed in report.failed.iter() {
            for dependent in shadow.get_dependents(failed) {
                let skipped = matches!(report.outcome_of(&dependent), RuleStatus::Skipped { .. });
                prop_assert!(skipped, "{} ran although {} failed", dependent, failed);
            }
        }

        // The clone handed to the session left the original untouched.
        prop_assert_eq!(shadow.remaining_len(), ids.len());
    }
}
