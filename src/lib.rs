// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::{RuleSetConfig, RuleSpec};
use crate::dag::RuleGraph;
use crate::engine::{run_per_target, ScriptedExecutor, SessionReport};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - rule-set loading and validation
/// - the rule graph
/// - one scheduling session per target, with a scripted executor built from
///   `--fail` / `--fix`
/// - report printing
///
/// Returns `true` when every session came out clean (nothing failed or
/// was skipped).
pub async fn run(args: CliArgs) -> Result<bool> {
    let cfg = load_and_validate(&args.rules)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(true);
    }

    warn_unknown_ids(&cfg, &args.fail, "--fail");
    warn_unknown_ids(&cfg, &args.fix, "--fix");

    let graph: RuleGraph<RuleSpec> = RuleGraph::new(cfg.into_rules())?;
    info!(rules = graph.len(), "rule graph built");

    let targets = if args.targets.is_empty() {
        vec!["default".to_string()]
    } else {
        args.targets.clone()
    };

    let executor = ScriptedExecutor::new(args.fail.iter().cloned(), args.fix.iter().cloned());
    let reports = run_per_target(&graph, targets, |_| executor.clone()).await?;

    let mut clean = true;
    for (target, report) in reports.iter() {
        print_report(target, report);
        clean &= report.is_clean();
    }

    Ok(clean)
}

fn warn_unknown_ids(cfg: &RuleSetConfig, ids: &[String], flag: &str) {
    for id in ids {
        if !cfg.rules().contains_key(id) {
            warn!(rule = %id, flag, "rule not present in rule set; ignoring");
        }
    }
}

/// Print the execution order and what failed or got skipped for one target.
fn print_report(target: &str, report: &SessionReport) {
    println!("target {target}:");

    let failed: BTreeSet<&str> = report.failed.iter().map(|s| s.as_str()).collect();
    let fixed: BTreeSet<&str> = report.fixed.iter().map(|s| s.as_str()).collect();

    for (n, id) in report.order.iter().enumerate() {
        let mark = if failed.contains(id.as_str()) {
            "FAILED"
        } else if fixed.contains(id.as_str()) {
            "fixed"
        } else {
            "passed"
        };
        println!("  {:>3}. {id} ({mark})", n + 1);
    }

    for id in report.skipped.iter() {
        let cause = report
            .skipped_by
            .get(id)
            .map(|s| s.as_str())
            .unwrap_or("?");
        println!("    - {id} (skipped: depends on {cause})");
    }

    println!(
        "  {} passed, {} fixed, {} failed, {} skipped",
        report.passed.len(),
        report.fixed.len(),
        report.failed.len(),
        report.skipped.len()
    );
}

/// Simple dry-run output: print rules and their prerequisites.
fn print_dry_run(cfg: &RuleSetConfig) {
    println!("rulesort dry-run");
    println!("rules ({}):", cfg.len());

    for (id, spec) in cfg.rules().iter() {
        println!("  - {id}");
        if let Some(ref description) = spec.description {
            println!("      description: {description}");
        }
        if !spec.prereqs.is_empty() {
            println!("      prereqs: {:?}", spec.prereqs);
        }
    }

    debug!("dry-run complete (nothing scheduled)");
}
