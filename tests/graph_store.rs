// tests/graph_store.rs
mod common;
use crate::common::builders::RuleSetBuilder;
use crate::common::init_tracing;

use std::collections::BTreeSet;
use std::error::Error;

use rulesort::dag::{Rule, RuleGraph};
use rulesort::errors::RulesortError;

type TestResult = Result<(), Box<dyn Error>>;

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn construct_initialises_remaining_from_declared_prereqs() -> TestResult {
    init_tracing();

    let graph = RuleSetBuilder::new()
        .rule("A", &[])
        .rule("B", &["A"])
        .rule("C", &["A", "B"])
        .graph();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.remaining_len(), 3);
    assert!(!graph.is_empty());

    assert_eq!(graph.remaining_prerequisites("A"), Some(&set(&[])));
    assert_eq!(graph.remaining_prerequisites("B"), Some(&set(&["A"])));
    assert_eq!(graph.remaining_prerequisites("C"), Some(&set(&["A", "B"])));
    assert_eq!(graph.remaining_prerequisites("missing"), None);

    Ok(())
}

#[test]
fn duplicate_rule_id_is_rejected() {
    init_tracing();

    let result = RuleGraph::new(vec![
        Rule::bare("A", Vec::<String>::new()),
        Rule::bare("B", ["A"]),
        Rule::bare("A", ["B"]),
    ]);

    match result {
        Err(RulesortError::DuplicateRuleId(id)) => assert_eq!(id, "A"),
        Err(e) => panic!("Expected DuplicateRuleId, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_rule_list_builds_an_empty_graph() -> TestResult {
    let graph: RuleGraph = RuleGraph::new(Vec::new())?;
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
    Ok(())
}

#[test]
fn get_consults_catalog_not_scheduling_state() -> TestResult {
    init_tracing();

    let mut graph = RuleGraph::new(vec![
        Rule::new("A", vec![], "check A"),
        Rule::new("B", vec!["A".to_string()], "check B"),
    ])?;

    assert_eq!(graph.get("A").map(|r| r.payload), Some("check A"));
    assert!(graph.get("nope").is_none());

    let popped = graph.pop_next_available()?;
    assert_eq!(popped.id, "A");
    assert!(!graph.is_scheduled("A"));

    // Still resolvable after it left the scheduling state.
    let a = graph.get("A").expect("A stays in the catalog");
    assert_eq!(a.payload, "check A");
    assert!(graph.get("B").is_some_and(|b| b.requires("A")));

    Ok(())
}

#[test]
fn clone_mutations_do_not_leak_into_original() -> TestResult {
    init_tracing();

    let original = RuleSetBuilder::new().chain(&["A", "B", "C"]).graph();
    let mut cloned = original.clone();

    let a = cloned.pop_next_available()?;
    cloned.remove(&a.id);
    cloned.remove("B");

    assert_eq!(cloned.remaining_len(), 1);
    assert_eq!(cloned.remaining_prerequisites("C"), Some(&set(&[])));

    assert_eq!(original.remaining_len(), 3);
    assert_eq!(original.remaining_prerequisites("B"), Some(&set(&["A"])));
    assert_eq!(original.remaining_prerequisites("C"), Some(&set(&["B"])));
    assert!(!original.is_empty());

    Ok(())
}

#[test]
fn original_mutations_do_not_leak_into_clone() -> TestResult {
    init_tracing();

    let mut original = RuleSetBuilder::new().chain(&["A", "B", "C"]).graph();
    let cloned = original.clone();

    let pruned = original.pop_dependent_rules("A");
    assert_eq!(pruned.len(), 2);
    let a = original.pop_next_available()?;
    assert_eq!(a.id, "A");
    assert!(original.is_empty());

    assert!(!cloned.is_empty());
    assert_eq!(cloned.blocked_rules(), vec!["A", "B", "C"]);
    assert_eq!(cloned.remaining_prerequisites("C"), Some(&set(&["B"])));

    Ok(())
}

#[test]
fn clone_shares_rule_objects() -> TestResult {
    let original = RuleSetBuilder::new().rule("A", &[]).graph();
    let cloned = original.clone();

    let a1 = original.get("A").expect("A registered");
    let a2 = cloned.get("A").expect("A registered");
    assert!(std::sync::Arc::ptr_eq(a1, a2));

    Ok(())
}
