//! # User Interface
//!
//! Colored terminal output with a verbose and a quiet switch.

pub mod log;

pub use log::{banner, debug, error, header, info, score, success, warn, Log};
