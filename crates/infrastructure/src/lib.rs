//! Nexus Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{ReqwestTransport, SystemClock};
pub use persistence::{FileSnapshotStore, SettingsError, SettingsRepository, SnapshotError};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
