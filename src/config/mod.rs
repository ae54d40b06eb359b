// src/config/mod.rs

//! Rule-set files for rulesort.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a rule-set file from disk (`loader.rs`).
//! - Validate basic invariants like prerequisite references and cycles
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_rules_path, load_and_validate, load_from_path};
pub use model::{RawRuleSetConfig, RuleSetConfig, RuleSpec};
