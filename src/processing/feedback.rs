//! Simulated feedback and score adjustment

use std::collections::HashMap;

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

use crate::config::FeedbackWeights;
use crate::core::recommendation::{REASON_NEGATIVE, REASON_POSITIVE};
use crate::core::{AssetType, FeedbackEvent, FeedbackSummary, Recommendation, Signal};
use crate::error::{RecError, Result};
use crate::ui;

/// Reject ratios outside [0, 1] or summing above 1
pub fn validate_ratios(positive_ratio: f64, negative_ratio: f64) -> Result<()> {
	let in_range = |r: f64| (0.0..=1.0).contains(&r);
	if in_range(positive_ratio) && in_range(negative_ratio) && positive_ratio + negative_ratio <= 1.0 {
		Ok(())
	} else {
		Err(RecError::InvalidRatio {
			positive: positive_ratio,
			negative: negative_ratio,
		})
	}
}

/// Draw at most one event per recommendation
///
/// A sample `r` in [0, 1) below `negative_ratio` is a dislike, below
/// `negative_ratio + positive_ratio` a like, anything else no feedback.
pub fn simulate(
	recommendations: &[Recommendation],
	positive_ratio: f64,
	negative_ratio: f64,
	rng: &mut StdRng,
) -> Result<Vec<FeedbackEvent>> {
	validate_ratios(positive_ratio, negative_ratio)?;

	let events: Vec<FeedbackEvent> = recommendations
		.iter()
		.filter_map(|rec| {
			let r: f64 = StandardUniform.sample(&mut *rng);
			if r < negative_ratio {
				Some(FeedbackEvent::for_recommendation(rec, Signal::Dislike))
			} else if r < negative_ratio + positive_ratio {
				Some(FeedbackEvent::for_recommendation(rec, Signal::Like))
			} else {
				None
			}
		})
		.collect();

	ui::debug(&format!("Simulated {} feedbacks", events.len()));
	Ok(events)
}

type FeedbackKey<'a> = (&'a str, AssetType, &'a str);

/// Net signal per (user, asset type, asset)
pub fn aggregate(events: &[FeedbackEvent]) -> HashMap<FeedbackKey<'_>, i32> {
	let mut net = HashMap::new();
	for e in events {
		*net.entry((e.user_id.as_str(), e.asset_type, e.asset_id.as_str()))
			.or_insert(0) += e.signal.value();
	}
	net
}

/// Adjusted copies of the recommendations
///
/// A positive net signal adds `weights.positive`. A zero or negative net
/// signal adds `weights.negative` and floors the score at 0. Entries without
/// feedback pass through unchanged. Applying twice adjusts twice.
pub fn apply(
	recommendations: &[Recommendation],
	events: &[FeedbackEvent],
	weights: &FeedbackWeights,
) -> Vec<Recommendation> {
	let net = aggregate(events);

	recommendations
		.iter()
		.map(|rec| {
			let key = (rec.user_id.as_str(), rec.asset_type, rec.asset_id.as_str());
			let mut adjusted = rec.clone();
			match net.get(&key) {
				Some(&sum) if sum > 0 => {
					adjusted.score += weights.positive;
					adjusted.reason.push_str(REASON_POSITIVE);
				}
				Some(_) => {
					adjusted.score = (adjusted.score + weights.negative).max(0.0);
					adjusted.reason.push_str(REASON_NEGATIVE);
				}
				None => {}
			}
			adjusted
		})
		.collect()
}

/// Feedback simulator that remembers every event it produced
#[derive(Debug, Clone, Default)]
pub struct FeedbackLearner {
	weights: FeedbackWeights,
	history: Vec<FeedbackEvent>,
}

impl FeedbackLearner {
	pub fn new(weights: FeedbackWeights) -> Self {
		Self {
			weights,
			history: Vec::new(),
		}
	}

	/// Simulate and record a round of feedback
	pub fn simulate(
		&mut self,
		recommendations: &[Recommendation],
		positive_ratio: f64,
		negative_ratio: f64,
		rng: &mut StdRng,
	) -> Result<Vec<FeedbackEvent>> {
		let events = simulate(recommendations, positive_ratio, negative_ratio, rng)?;
		self.history.extend(events.iter().cloned());
		Ok(events)
	}

	pub fn apply(&self, recommendations: &[Recommendation], events: &[FeedbackEvent]) -> Vec<Recommendation> {
		apply(recommendations, events, &self.weights)
	}

	/// Every event simulated so far, in order
	pub fn history(&self) -> &[FeedbackEvent] {
		&self.history
	}

	pub fn summary(&self) -> FeedbackSummary {
		FeedbackSummary::from_events(&self.history)
	}
}
