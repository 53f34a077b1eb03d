//! Collision detection between `L`-flagged rules and later rules.
//!
//! A rule `A` collides with a later rule `B` when `A` carries the `L` flag
//! and `B.source` starts with `A.source`. Comparison is literal; patterns
//! are never evaluated as regular expressions. Rules whose destination ends
//! in `$` are dropped before any comparison, on both sides of a pair.

use thiserror::Error;
use tracing::{debug, trace};

use rewrite_model::{CollisionReport, Rule};

/// A file failed validation with at least one collision.
#[derive(Debug, Clone, Error)]
#[error("{} colliding rule(s)", .reports.len())]
pub struct CollisionError {
    /// Rules extracted from the file, eligible or not.
    pub rule_count: usize,
    pub reports: Vec<CollisionReport>,
}

/// Rules taking part in collision analysis, in source order.
pub fn eligible_rules(rules: &[Rule]) -> Vec<&Rule> {
    rules.iter().filter(|rule| !rule.is_terminal_anchor()).collect()
}

/// Report at most one collision per `L`-flagged rule, naming the earliest
/// later rule that subsumes it.
pub fn detect_collisions(rules: &[Rule]) -> Vec<CollisionReport> {
    let eligible = eligible_rules(rules);
    debug!(
        rule_count = rules.len(),
        eligible_count = eligible.len(),
        "checking rule collisions"
    );

    let mut reports = Vec::new();
    for &rule in &eligible {
        let Some(&overrider) = eligible
            .iter()
            .find(|candidate| subsumes(candidate, rule))
        else {
            continue;
        };
        trace!(
            overridden = rule.index(),
            overrider = overrider.index(),
            "collision"
        );
        reports.push(CollisionReport::collision(rule.clone(), overrider.clone()));
    }
    reports
}

/// Pass/fail verdict for one file's rules.
pub fn check_rules(rules: &[Rule]) -> Result<(), CollisionError> {
    let reports = detect_collisions(rules);
    if reports.is_empty() {
        Ok(())
    } else {
        Err(CollisionError {
            rule_count: rules.len(),
            reports,
        })
    }
}

fn subsumes(later: &Rule, earlier: &Rule) -> bool {
    earlier.index() < later.index()
        && earlier.flags().is_last()
        && later.source().starts_with(earlier.source())
}
