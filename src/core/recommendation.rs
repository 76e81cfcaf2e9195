//! Recommendation and feedback records

use serde::Serialize;

use crate::config::{BoostWeights, FeedbackWeights, VectorizerParams};
use crate::core::{AssetType, PerAsset};

pub const REASON_SIMILARITY: &str = "text-based similarity";
pub const REASON_POPULARITY: &str = "popularity fallback";
pub const REASON_POSITIVE: &str = "; feedback adjusted (positive)";
pub const REASON_NEGATIVE: &str = "; feedback adjusted (negative)";

/// A ranked asset for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
	pub user_id: String,
	pub asset_id: String,
	/// Serialized as "event", "job" or "post"
	pub asset_type: AssetType,
	pub score: f32,
	pub reason: String,
}

/// Like or dislike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
	Like,
	Dislike,
}

impl Signal {
	/// +1 for a like, -1 for a dislike
	pub fn value(&self) -> i32 {
		match self {
			Self::Like => 1,
			Self::Dislike => -1,
		}
	}
}

/// Synthetic feedback on one recommended asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackEvent {
	pub user_id: String,
	pub asset_type: AssetType,
	pub asset_id: String,
	pub signal: Signal,
}

impl FeedbackEvent {
	pub fn for_recommendation(rec: &Recommendation, signal: Signal) -> Self {
		Self {
			user_id: rec.user_id.clone(),
			asset_type: rec.asset_type,
			asset_id: rec.asset_id.clone(),
			signal,
		}
	}
}

/// All recommendations of one user, grouped by asset type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecommendations {
	pub user_id: String,
	pub recommendations: PerAsset<Vec<Recommendation>>,
}

/// Like / dislike totals of a simulation round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackSummary {
	pub likes: usize,
	pub dislikes: usize,
}

impl FeedbackSummary {
	pub fn from_events(events: &[FeedbackEvent]) -> Self {
		events.iter().fold(Self::default(), |mut acc, e| {
			match e.signal {
				Signal::Like => acc.likes += 1,
				Signal::Dislike => acc.dislikes += 1,
			}
			acc
		})
	}

	pub fn total(&self) -> usize {
		self.likes + self.dislikes
	}
}

/// Parameters a run was produced with
#[derive(Debug, Clone, Serialize)]
pub struct RunParams {
	pub top_n: usize,
	pub seed: u64,
	pub positive_ratio: f64,
	pub negative_ratio: f64,
	pub vectorizer: VectorizerParams,
	pub boosts: BoostWeights,
	pub feedback: FeedbackWeights,
}

/// Complete result of a pipeline run
#[derive(Debug, Serialize)]
pub struct RunReport {
	/// unirec version that produced this
	pub version: String,
	/// When the run finished
	pub timestamp: String,
	pub params: RunParams,
	pub vocabulary_size: usize,
	pub feedback: FeedbackSummary,
	pub users: Vec<UserRecommendations>,
}

impl RunReport {
	pub fn total_recommendations(&self) -> usize {
		self.users
			.iter()
			.map(|u| u.recommendations.iter().map(|(_, recs)| recs.len()).sum::<usize>())
			.sum()
	}
}
