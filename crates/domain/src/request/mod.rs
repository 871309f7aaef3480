//! HTTP Request domain types

mod header;
mod method;
mod spec;

pub use header::{Headers, find_header, parse_header_line};
pub use method::HttpMethod;
pub use spec::{Request, UNTITLED_REQUEST};
