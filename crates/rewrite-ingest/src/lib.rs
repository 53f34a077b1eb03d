pub mod error;
pub mod extract;
pub mod reader;

pub use error::{IngestError, Result};
pub use extract::{DIRECTIVE, extract_rules, parse_rule_line};
pub use reader::read_rules;
