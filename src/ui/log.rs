//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}

	/// Silence everything but errors (stdout carries JSON)
	pub fn set_quiet(enabled: bool) {
		QUIET.store(enabled, Ordering::Relaxed);
	}

	pub fn is_quiet() -> bool {
		QUIET.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	if !Log::is_quiet() {
		println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
	}
}

pub fn success(msg: &str) {
	if !Log::is_quiet() {
		println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
	}
}

pub fn warn(msg: &str) {
	if !Log::is_quiet() {
		println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
	}
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() && !Log::is_quiet() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	if !Log::is_quiet() {
		println!("\n{}", text.bright_blue().bold());
	}
}

/// Version banner
pub fn banner() {
	header(&format!("─── unirec v{} ───", env!("CARGO_PKG_VERSION")));
}

/// Score rendered with two decimals, dimmed when it is zero
pub fn score(value: f32) -> String {
	let text = format!("{:.2}", value);
	if value == 0.0 {
		text.dimmed().to_string()
	} else {
		text.bright_yellow().to_string()
	}
}
