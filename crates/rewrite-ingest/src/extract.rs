//! `RewriteRule` directive parsing.
//!
//! Only lines starting at column 0 with `RewriteRule` and a whitespace
//! character are considered. After the directive, the first whitespace run
//! is skipped and the remainder is split on single spaces into source,
//! destination and flag block. Later runs of spaces are not collapsed, so
//! `RewriteRule /a  /b` yields an empty destination and no rule.

use tracing::{debug, trace};

use rewrite_model::{Rule, RuleFlags};

/// Directive keyword, matched case-sensitively.
pub const DIRECTIVE: &str = "RewriteRule";

/// Parse one line. `index` is the 1-based line number.
///
/// Returns `None` for non-directive lines and for directives whose source or
/// destination is empty after unquoting.
pub fn parse_rule_line(index: usize, line: &str) -> Option<Rule> {
    let rest = line.strip_prefix(DIRECTIVE)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut parts = rest.trim_start().split(' ');
    let source = unquote(parts.next().unwrap_or_default());
    let destination = unquote(parts.next().unwrap_or_default());
    let flags = RuleFlags::parse(parts.next().unwrap_or_default());

    if source.is_empty() || destination.is_empty() {
        trace!(line = index, "directive without source or destination");
        return None;
    }

    Some(Rule::new(index, source, destination, flags, line))
}

/// Extract every usable rule from a config document, in line order.
pub fn extract_rules(text: &str) -> Vec<Rule> {
    let mut line_count = 0usize;
    let rules: Vec<Rule> = text
        .split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            line_count += 1;
            parse_rule_line(idx + 1, line)
        })
        .collect();
    debug!(line_count, rule_count = rules.len(), "extracted rewrite rules");
    rules
}

/// Strip one leading and one trailing double quote.
fn unquote(token: &str) -> &str {
    let token = token.strip_prefix('"').unwrap_or(token);
    token.strip_suffix('"').unwrap_or(token)
}
