use serde::Serialize;

use crate::rule::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Collision,
}

/// An `L`-flagged rule whose source is a prefix of a later rule's source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionReport {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    /// The earlier, terminating rule.
    pub overridden: Rule,
    /// The first later rule whose source starts with `overridden.source`.
    pub overrider: Rule,
}

impl CollisionReport {
    pub fn collision(overridden: Rule, overrider: Rule) -> Self {
        Self {
            kind: ReportKind::Collision,
            overridden,
            overrider,
        }
    }
}
