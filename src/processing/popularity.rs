//! Content-only popularity used when a user has no usable profile text

use std::collections::HashMap;

use crate::core::AssetRecord;

/// Popularity per asset id
///
/// `raw = max(1, tag count) + description length / 1000`, min-max scaled to
/// [0, 1] across the pool. A pool whose raw scores all tie (including a
/// single asset) keeps its raw values.
pub fn score(assets: &[AssetRecord]) -> HashMap<String, f32> {
	let raw: Vec<(&str, f32)> = assets.iter().map(|a| (a.id.as_str(), raw_score(a))).collect();

	let (min, max) = raw.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &(_, s)| {
		(lo.min(s), hi.max(s))
	});

	raw.into_iter()
		.map(|(id, s)| {
			let value = if max > min { (s - min) / (max - min) } else { s };
			(id.to_string(), value)
		})
		.collect()
}

fn raw_score(asset: &AssetRecord) -> f32 {
	let base = asset.tag_tokens().count().max(1) as f32;
	base + asset.description.chars().count() as f32 / 1000.0
}
