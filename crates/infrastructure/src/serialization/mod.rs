//! Deterministic JSON serialization for Nexus files.
//!
//! Keeps on-disk files diff-friendly:
//! - Map keys sorted (via `BTreeMap` in domain types)
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
