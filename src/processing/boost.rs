//! Rule-based relevance boosts from profile attributes

use crate::config::BoostWeights;
use crate::core::entity::split_tags;
use crate::core::{AssetRecord, UserRecord};

/// Lowercased user attributes the rules look at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
	pub city: String,
	pub interests: String,
}

impl UserProfile {
	pub fn new(city: &str, interests: &str) -> Self {
		Self {
			city: city.to_lowercase(),
			interests: interests.to_lowercase(),
		}
	}

	pub fn from_record(user: &UserRecord) -> Self {
		Self::new(&user.city, &user.interests)
	}
}

/// Lowercased asset attributes the rules look at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetProfile {
	pub city: String,
	pub category: String,
	pub tags: String,
}

impl AssetProfile {
	pub fn new(city: &str, category: &str, tags: &str) -> Self {
		Self {
			city: city.to_lowercase(),
			category: category.to_lowercase(),
			tags: tags.to_lowercase(),
		}
	}

	pub fn from_record(asset: &AssetRecord) -> Self {
		Self::new(&asset.city, &asset.category, &asset.tags)
	}
}

/// Sum of the rules that fire for this user / asset pair
pub fn boost(user: &UserProfile, asset: &AssetProfile, weights: &BoostWeights) -> f32 {
	let mut total = 0.0;
	if city_match(user, asset) {
		total += weights.city;
	}
	if category_overlap(user, asset) {
		total += weights.category;
	}
	if tag_overlap(user, asset) {
		total += weights.tag;
	}
	total
}

/// Same city, ignoring case. An empty user city never matches.
pub fn city_match(user: &UserProfile, asset: &AssetProfile) -> bool {
	!user.city.is_empty() && user.city == asset.city
}

/// Some whitespace token of the category occurs inside the interests
pub fn category_overlap(user: &UserProfile, asset: &AssetProfile) -> bool {
	asset
		.category
		.split_whitespace()
		.any(|token| user.interests.contains(token))
}

/// Some trimmed, non-empty tag occurs inside the interests
pub fn tag_overlap(user: &UserProfile, asset: &AssetProfile) -> bool {
	split_tags(&asset.tags).any(|tag| user.interests.contains(tag))
}
