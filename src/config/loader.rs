// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawRuleSetConfig, RuleSetConfig};
use crate::errors::Result;

/// Load a rule-set file from a given path and return the raw
/// `RawRuleSetConfig`.
///
/// This only performs TOML deserialization; it does **not** check
/// prerequisite references or cycles. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawRuleSetConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawRuleSetConfig = toml::from_str(&contents)?;
    debug!(path = ?path, rules = config.rule.len(), "rule set parsed");

    Ok(config)
}

/// Load a rule-set file from path and validate it.
///
/// Checks for:
/// - an empty rule set,
/// - unknown or self-referencing `prereqs`,
/// - prerequisite cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RuleSetConfig> {
    let raw = load_from_path(&path)?;
    RuleSetConfig::try_from(raw)
}

/// Default rule-set location: `Rules.toml` in the current working directory.
pub fn default_rules_path() -> PathBuf {
    PathBuf::from("Rules.toml")
}
