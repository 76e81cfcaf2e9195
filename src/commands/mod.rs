//! # Command Implementations
//!
//! Each submodule handles one CLI command (run, rank, vocab).

pub mod rank;
pub mod run;
pub mod vocab;
