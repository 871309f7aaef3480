//! Nexus Domain - Core business types
//!
//! This crate defines the domain model for the Nexus request workbench.
//! All types here are pure Rust with no I/O dependencies.

pub mod collection;
pub mod environment;
pub mod error;
pub mod history;
pub mod id;
pub mod persistence;
pub mod request;
pub mod response;
pub mod settings;
pub mod tab;

pub use collection::{DEFAULT_COLLECTION, GroupedCollections, UNCATEGORIZED};
pub use environment::Environment;
pub use error::{DomainError, DomainResult};
pub use history::{HISTORY_LIMIT, HistoryEntry};
pub use id::{generate_id, validate_id};
pub use persistence::WorkspaceSnapshot;
pub use request::{HttpMethod, Request};
pub use response::{Payload, Response};
pub use settings::WorkbenchSettings;
pub use tab::{RequestPatch, Tab, TabPatch};
