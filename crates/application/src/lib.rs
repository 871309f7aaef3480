//! Nexus Application - Ports, stores and the workspace façade
//!
//! This crate defines the application layer with:
//! - Port traits (transport, clock, snapshot persistence)
//! - Template resolution and request execution
//! - The in-memory stores and the `Workspace` that wires them together

pub mod error;
pub mod execute_request;
pub mod ports;
pub mod stores;
pub mod variable_resolver;
pub mod workspace;

pub use error::{ApplicationError, ApplicationResult};
pub use execute_request::{RequestExecutor, prepare};
pub use ports::{
    Clock, HttpTransport, OutgoingRequest, SnapshotStore, TransportError, TransportResponse,
};
pub use stores::{CollectionManager, EnvironmentStore, HistoryLog, TabStore};
pub use variable_resolver::{ResolutionResult, interpolate, resolve};
pub use workspace::Workspace;
