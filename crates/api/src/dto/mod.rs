//! Data transfer objects for the API layer.
//!
//! - [`request`]: typed path parameters
//! - [`response`]: the `{status, value}` envelope

pub mod request;
pub mod response;

pub use response::StatusResponse;
