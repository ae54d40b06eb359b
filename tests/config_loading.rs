// tests/config_loading.rs
mod common;
use crate::common::builders::RuleSetBuilder;
use crate::common::init_tracing;

use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

use rulesort::config::{load_and_validate, RuleSetConfig};
use rulesort::dag::RuleGraph;
use rulesort::engine::{ScriptedExecutor, Session};
use rulesort::errors::RulesortError;

type TestResult = Result<(), Box<dyn Error>>;

fn write_rules(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn valid_rule_set_loads_and_schedules() -> TestResult {
    init_tracing();

    let file = write_rules(
        r#"
[rule.namespace-exists]
description = "target namespace exists"

[rule.deployment-selector]
description = "selector matches pod template"
prereqs = ["namespace-exists"]

[rule.service-ports]
after = ["deployment-selector"]
"#,
    );

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.len(), 3);
    assert_eq!(
        cfg.rules()["service-ports"].prereqs,
        vec!["deployment-selector"]
    );
    assert_eq!(cfg.rules()["service-ports"].description, None);

    let graph = RuleGraph::new(cfg.into_rules())?;
    assert_eq!(
        graph.get("namespace-exists").and_then(|r| r.payload.description.clone()),
        Some("target namespace exists".to_string())
    );

    let report = Session::new(graph, ScriptedExecutor::default()).run()?;
    assert_eq!(
        report.order,
        vec!["namespace-exists", "deployment-selector", "service-ports"]
    );

    Ok(())
}

#[test]
fn cycle_returns_structured_error() {
    init_tracing();

    let file = write_rules(
        r#"
[rule.A]
prereqs = ["B"]

[rule.B]
prereqs = ["A"]

[rule.C]
"#,
    );

    match load_and_validate(file.path()) {
        Err(RulesortError::DependencyCycle { blocked }) => {
            assert_eq!(blocked, vec!["A", "B"]);
        }
        Err(e) => panic!("Expected DependencyCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_prerequisite_returns_config_error() {
    let file = write_rules(
        r#"
[rule.A]
prereqs = ["NonExistent"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(RulesortError::ConfigError(msg)) => {
            assert!(msg.contains("unknown prerequisite"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn self_reference_returns_config_error() {
    let raw = RuleSetBuilder::new().rule("A", &["A"]).raw_config();

    match RuleSetConfig::try_from(raw) {
        Err(RulesortError::ConfigError(msg)) => assert!(msg.contains("itself")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_rule_set_is_rejected() {
    let file = write_rules("");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(RulesortError::ConfigError(_))
    ));
}

#[test]
fn malformed_toml_returns_toml_error() {
    let file = write_rules("[rule.A\nprereqs = ");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(RulesortError::TomlError(_))
    ));
}

#[test]
fn missing_file_returns_io_error() {
    assert!(matches!(
        load_and_validate("/definitely/not/here/Rules.toml"),
        Err(RulesortError::IoError(_))
    ));
}

#[test]
fn builder_config_round_trips_into_rules() {
    let cfg = RuleSetBuilder::new().chain(&["A", "B"]).config();
    let rules = cfg.into_rules();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[1].id, "B");
    assert_eq!(rules[1].prereqs, vec!["A"]);
    assert_eq!(rules[1].payload.prereqs, vec!["A"]);
}
