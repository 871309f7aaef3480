//! Variable resolution engine
//!
//! Substitutes `{{variable}}` tokens with values from the active environment.

use nexus_domain::Environment;

use super::parser::parse_variables;

/// Result of variable resolution for a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The string with every known variable substituted.
    pub resolved: String,

    /// Names of variables that were substituted.
    pub resolved_variables: Vec<String>,

    /// Names of tokens left verbatim because no value exists.
    pub unresolved: Vec<String>,
}

impl ResolutionResult {
    /// Creates a result that leaves the input untouched.
    #[must_use]
    pub fn unchanged(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            resolved_variables: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Returns true when no token was left unresolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves all tokens in `input` against `environment`.
///
/// Tokens without a matching variable are kept verbatim. With no active
/// environment the input comes back unchanged.
///
/// Resolution is a single pass: substituted values are never scanned again.
#[must_use]
pub fn resolve(input: &str, environment: Option<&Environment>) -> ResolutionResult {
    let Some(environment) = environment else {
        return ResolutionResult::unchanged(input);
    };

    let references = parse_variables(input);
    if references.is_empty() {
        return ResolutionResult::unchanged(input);
    }

    let mut resolved_variables = Vec::new();
    let mut unresolved = Vec::new();
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;

    for var_ref in &references {
        result.push_str(&input[last_end..var_ref.span.start]);

        if let Some(value) = environment.get_variable(&var_ref.name) {
            result.push_str(value);
            resolved_variables.push(var_ref.name.clone());
        } else {
            result.push_str(&input[var_ref.span.clone()]);
            unresolved.push(var_ref.name.clone());
        }

        last_end = var_ref.span.end;
    }

    result.push_str(&input[last_end..]);

    ResolutionResult {
        resolved: result,
        resolved_variables,
        unresolved,
    }
}

/// Substitutes tokens in `text` with the active environment's values.
///
/// # Examples
///
/// ```
/// use nexus_application::variable_resolver::interpolate;
/// use nexus_domain::Environment;
///
/// let env = Environment::with_id("local", "Local").with_variable("base_url", "http://x");
/// assert_eq!(interpolate("{{base_url}}/ping", Some(&env)), "http://x/ping");
/// assert_eq!(interpolate("{{missing}}/ping", Some(&env)), "{{missing}}/ping");
/// assert_eq!(interpolate("{{base_url}}", None), "{{base_url}}");
/// ```
#[must_use]
pub fn interpolate(text: &str, environment: Option<&Environment>) -> String {
    resolve(text, environment).resolved
}
