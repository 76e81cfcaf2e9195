//! # unirec Library
//!
//! Content recommendations for users over a shared TF-IDF embedding space.
//! Provides vocabulary fitting, cosine ranking with popularity fallback and
//! rule-based boosts, and simulated feedback adjustment.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod processing;
pub mod storage;
pub mod ui;

pub use error::{RecError, Result};
