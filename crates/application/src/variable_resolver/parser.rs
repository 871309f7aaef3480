//! Variable parser for {{variable}} syntax
//!
//! Finds variable tokens in a string together with their positions.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// A token is `{{name}}` where name is one or more ASCII letters, digits or underscores.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("token pattern is valid")
});

/// Represents a parsed variable reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name (without {{ }}).
    pub name: String,

    /// Byte range in the original string where the whole token appears.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Parses a string and extracts all variable references, in order.
///
/// Text such as `{{ name }}` or `{{a-b}}` is not a token and is ignored.
///
/// # Examples
///
/// ```
/// use nexus_application::variable_resolver::parse_variables;
///
/// let refs = parse_variables("{{base_url}}/users/{{user_id}}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "base_url");
/// assert_eq!(refs[1].span, 19..30);
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    TOKEN_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(VariableReference::new(name.as_str(), whole.range()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_variable() {
        let refs = parse_variables("{{name}}");
        assert_eq!(refs, vec![VariableReference::new("name", 0..8)]);
    }

    #[test]
    fn test_parse_multiple_variables() {
        let refs = parse_variables("{{base_url}}/api/{{version}}/users/{{id_2}}");
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["base_url", "version", "id_2"]);
    }

    #[test]
    fn test_whitespace_is_not_a_token() {
        assert!(parse_variables("{{ name }}").is_empty());
    }

    #[test]
    fn test_non_word_characters_are_not_tokens() {
        assert!(parse_variables("{{$uuid}}").is_empty());
        assert!(parse_variables("{{api-key}}").is_empty());
    }

    #[test]
    fn test_unclosed_and_empty() {
        assert!(parse_variables("{{name").is_empty());
        assert!(parse_variables("{{}}").is_empty());
    }

    #[test]
    fn test_triple_braces_match_inner_token() {
        let refs = parse_variables("{{{name}}}");
        assert_eq!(refs, vec![VariableReference::new("name", 1..9)]);
    }

    #[test]
    fn test_spaced_braces_are_not_tokens() {
        assert!(parse_variables("{{not a token}}").is_empty());
        assert!(parse_variables("{{ token }}").is_empty());
    }
}
