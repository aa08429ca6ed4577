//! API error handling and response conversion.
//!
//! [`ApiError`] wraps domain validation errors and the two boundary failures
//! (unknown route, internal failure), and renders all of them as the shared
//! `{status, value}` envelope.

pub mod api_error;

pub use api_error::ApiError;
