//! Parsed `RewriteRule` directives.

use std::fmt;

use serde::Serialize;

/// Option tokens from a bracketed flag block such as `[L,R=301]`.
///
/// Tokens are kept in source order and upper-cased. A missing or empty flag
/// block yields a single empty token rather than an empty list, so
/// `RuleFlags::parse("")` has `len() == 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleFlags(Vec<String>);

impl RuleFlags {
    /// Normalize a raw flag block: drop brackets and whitespace, upper-case,
    /// split on commas.
    pub fn parse(block: &str) -> Self {
        let cleaned: String = block
            .chars()
            .filter(|c| *c != '[' && *c != ']' && !c.is_whitespace())
            .collect();
        let upper = cleaned.to_uppercase();
        Self(upper.split(',').map(str::to_string).collect())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|flag| flag == token)
    }

    /// True when the `L` (last) flag is present.
    pub fn is_last(&self) -> bool {
        self.contains("L")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no token carries a value, including the single `""` token.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }
}

impl fmt::Display for RuleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(","))
    }
}

/// One `RewriteRule` line with non-empty source and destination.
///
/// Fields are private; a rule never changes after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    index: usize,
    source: String,
    destination: String,
    flags: RuleFlags,
    #[serde(rename = "line")]
    raw_line: String,
}

impl Rule {
    pub fn new(
        index: usize,
        source: impl Into<String>,
        destination: impl Into<String>,
        flags: RuleFlags,
        raw_line: impl Into<String>,
    ) -> Self {
        Self {
            index,
            source: source.into(),
            destination: destination.into(),
            flags,
            raw_line: raw_line.into(),
        }
    }

    /// 1-based line number in the source file.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn flags(&self) -> &RuleFlags {
        &self.flags
    }

    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Destinations ending in `$` are intentional terminal mappings and are
    /// excluded from collision analysis.
    pub fn is_terminal_anchor(&self) -> bool {
        self.destination.ends_with('$')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_uppercased_and_unbracketed() {
        let flags = RuleFlags::parse("[l, r=301,nc]");
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec!["L", "R=301", "NC"]);
        assert!(flags.is_last());
    }

    #[test]
    fn absent_flags_keep_single_empty_token() {
        let flags = RuleFlags::parse("");
        assert_eq!(flags.len(), 1);
        assert!(flags.contains(""));
        assert!(flags.is_empty());
        assert!(!flags.is_last());
        assert_eq!(flags.to_string(), "[]");
    }

    #[test]
    fn last_flag_must_match_whole_token() {
        assert!(!RuleFlags::parse("[NC,QSL]").is_last());
        assert!(RuleFlags::parse("[NC,L]").is_last());
    }

    #[test]
    fn terminal_anchor_checks_destination_suffix() {
        let anchored = Rule::new(3, "/a", "/x$", RuleFlags::parse("[L]"), "");
        let open = Rule::new(4, "/a$", "/x", RuleFlags::parse("[L]"), "");
        assert!(anchored.is_terminal_anchor());
        assert!(!open.is_terminal_anchor());
    }
}
