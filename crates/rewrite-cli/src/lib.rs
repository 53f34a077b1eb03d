//! Library components for the `validate-rewrites` CLI.

pub mod logging;
pub mod report;
pub mod summary;
