pub mod collision;
pub mod outcome;
pub mod rule;

pub use collision::{CollisionReport, ReportKind};
pub use outcome::{FileOutcome, FileStatus};
pub use rule::{Rule, RuleFlags};
