// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::dag::RuleId;

#[derive(Error, Debug)]
pub enum RulesortError {
    #[error("Duplicate rule ID: {0}")]
    DuplicateRuleId(RuleId),

    /// No remaining rule has all of its prerequisites satisfied. Either the
    /// declared prerequisites form a cycle or one of them names a rule that
    /// was never registered.
    #[error(
        "Dependency cycle or missing prerequisite; rules still blocked: {}",
        .blocked.join(", ")
    )]
    DependencyCycle { blocked: Vec<RuleId> },

    #[error("No rules left to schedule")]
    Exhausted,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RulesortError>;
