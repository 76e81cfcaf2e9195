//! Dataset input and report output

pub mod dataset;

pub use dataset::{load, to_json};
