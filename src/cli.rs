// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `rulesort`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rulesort",
    version,
    about = "Schedule dependent rules and show what runs, fails and gets skipped.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the rule-set file (TOML).
    ///
    /// Default: `Rules.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Rules.toml")]
    pub rules: String,

    /// Treat this rule as failing (repeatable).
    #[arg(long = "fail", value_name = "ID")]
    pub fail: Vec<String>,

    /// Treat this rule as failing its check but succeeding its fix
    /// (repeatable).
    #[arg(long = "fix", value_name = "ID")]
    pub fix: Vec<String>,

    /// Evaluate the rule set independently for this target (repeatable).
    ///
    /// With no targets a single session named `default` is run.
    #[arg(long = "target", value_name = "NAME")]
    pub targets: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RULESORT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the rule set, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
