//! Variable resolution module
//!
//! Provides parsing and resolution of `{{variable}}` syntax in strings.
//!
//! # Usage
//!
//! ```
//! use nexus_application::variable_resolver::resolve;
//! use nexus_domain::Environment;
//!
//! let env = Environment::new("development").with_variable("host", "localhost");
//!
//! let result = resolve("http://{{host}}/api/{{version}}", Some(&env));
//! assert_eq!(result.resolved, "http://localhost/api/{{version}}");
//! assert_eq!(result.unresolved, vec!["version".to_string()]);
//! ```

pub mod engine;
pub mod parser;

pub use engine::{ResolutionResult, interpolate, resolve};
pub use parser::{VariableReference, parse_variables};
