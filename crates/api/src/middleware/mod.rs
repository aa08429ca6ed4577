//! API middleware components.
//!
//! - [`panic_capture`]: converts handler panics into internal-failure
//!   envelopes

pub mod panic_capture;

pub use panic_capture::PanicCaptureLayer;
