// src/dag/mod.rs

//! Rule dependency graph and scheduling.
//!
//! - [`rule`] defines the rule record and its identifier.
//! - [`catalog`] holds the immutable rule set and its reverse adjacency.
//! - [`graph`] is the per-session store (catalog + remaining prerequisites).
//! - [`dependents`] answers transitive "who depends on this rule" queries.
//! - [`scheduler`] pops ready rules, marks rules satisfied, and prunes
//!   dependents of failed rules.

pub mod catalog;
pub mod dependents;
pub mod graph;
pub mod rule;
pub mod scheduler;

pub use catalog::RuleCatalog;
pub use graph::RuleGraph;
pub use rule::{Rule, RuleId};
