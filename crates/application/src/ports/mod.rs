//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod http_transport;
mod snapshot_store;

pub use clock::Clock;
pub use http_transport::{HttpTransport, OutgoingRequest, TransportError, TransportResponse};
pub use snapshot_store::SnapshotStore;
