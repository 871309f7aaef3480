//! HTTP Response domain types

mod spec;

pub use spec::{NETWORK_ERROR_STATUS_TEXT, Payload, Response, StatusCode};
