//! Configuration types
//!
//! Board-level configuration for the ohmmeter. The defaults describe the
//! reference board; other boards override fields before bring-up.

pub mod hardware;

pub use hardware::*;
