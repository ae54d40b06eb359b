// src/dag/rule.rs

//! Rule records as registered with the graph.

/// Canonical rule identifier used throughout the crate.
pub type RuleId = String;

/// A uniquely identified unit of work plus the rules it requires.
///
/// `payload` is whatever the driver needs to actually evaluate the rule
/// (a condition, a fix, a description). The graph never looks at it.
#[derive(Debug, Clone)]
pub struct Rule<P = ()> {
    pub id: RuleId,
    /// Rules that must be satisfied before this one may run.
    pub prereqs: Vec<RuleId>,
    pub payload: P,
}

impl<P> Rule<P> {
    pub fn new(id: impl Into<RuleId>, prereqs: Vec<RuleId>, payload: P) -> Self {
        Self {
            id: id.into(),
            prereqs,
            payload,
        }
    }

    /// Whether `other` appears in this rule's declared prerequisites.
    pub fn requires(&self, other: &str) -> bool {
        self.prereqs.iter().any(|p| p == other)
    }
}

impl Rule<()> {
    /// Rule without a payload, mostly useful for tests and planning.
    pub fn bare<I, S>(id: impl Into<RuleId>, prereqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleId>,
    {
        Self::new(id, prereqs.into_iter().map(Into::into).collect(), ())
    }
}
