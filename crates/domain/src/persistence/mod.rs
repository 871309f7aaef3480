//! Persisted data shapes

mod snapshot;

pub use snapshot::WorkspaceSnapshot;
