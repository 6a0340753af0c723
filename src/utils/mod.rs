//! Utility functions shared by the binary.
//!
//! - [`logging`] - tracing subscriber set-up
//! - [`progress`] - spinner that becomes a no-op without the `progress` feature

pub mod logging;
pub mod progress;

pub use logging::init_logging;
