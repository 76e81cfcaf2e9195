//! Application configuration and constants

use std::sync::OnceLock;

use serde::Serialize;

static CUSTOM_SEED: OnceLock<u64> = OnceLock::new();

// === Vectorizer ===
pub const MAX_FEATURES: usize = 5000;
pub const NGRAM_RANGE: (usize, usize) = (1, 2);
pub const MIN_DF: usize = 1;

// === Ranking ===
pub const DEFAULT_TOP_N: usize = 10;
pub const CITY_BOOST: f32 = 0.10;
pub const CATEGORY_BOOST: f32 = 0.05;
pub const TAG_BOOST: f32 = 0.03;
pub const TAG_DELIMITER: char = ';';

// === Feedback ===
pub const POSITIVE_WEIGHT: f32 = 0.2;
pub const NEGATIVE_WEIGHT: f32 = -0.25;
pub const POSITIVE_RATIO: f64 = 0.03;
pub const NEGATIVE_RATIO: f64 = 0.01;

// === Reproducibility ===
pub const DEFAULT_SEED: u64 = 42;
pub const SEED_ENV: &str = "UNIREC_SEED";

pub fn set_seed(seed: u64) {
	let _ = CUSTOM_SEED.set(seed);
}

/// Seed for feedback simulation (--seed, then UNIREC_SEED, then the default)
pub fn seed() -> u64 {
	if let Some(custom) = CUSTOM_SEED.get() {
		crate::ui::debug(&format!("Using custom seed: {}", custom));
		return *custom;
	}

	if let Ok(value) = std::env::var(SEED_ENV) {
		match value.trim().parse::<u64>() {
			Ok(seed) => {
				crate::ui::debug(&format!("Using {}: {}", SEED_ENV, seed));
				return seed;
			}
			Err(_) => crate::ui::warn(&format!("Ignoring invalid {}: '{}'", SEED_ENV, value)),
		}
	}

	DEFAULT_SEED
}

/// TF-IDF vocabulary parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VectorizerParams {
	/// Upper bound on vocabulary size
	pub max_features: usize,
	/// Inclusive n-gram lengths
	pub ngram_range: (usize, usize),
	/// Minimum number of documents a term must occur in
	pub min_df: usize,
}

impl Default for VectorizerParams {
	fn default() -> Self {
		Self {
			max_features: MAX_FEATURES,
			ngram_range: NGRAM_RANGE,
			min_df: MIN_DF,
		}
	}
}

/// Additive rule-based boosts applied on top of the base score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoostWeights {
	pub city: f32,
	pub category: f32,
	pub tag: f32,
}

impl Default for BoostWeights {
	fn default() -> Self {
		Self {
			city: CITY_BOOST,
			category: CATEGORY_BOOST,
			tag: TAG_BOOST,
		}
	}
}

/// Score adjustments for liked / disliked recommendations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedbackWeights {
	pub positive: f32,
	pub negative: f32,
}

impl Default for FeedbackWeights {
	fn default() -> Self {
		Self {
			positive: POSITIVE_WEIGHT,
			negative: NEGATIVE_WEIGHT,
		}
	}
}
