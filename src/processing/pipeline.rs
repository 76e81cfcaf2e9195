//! End-to-end batch run: embed, rank, simulate feedback, adjust, group

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{self, BoostWeights, FeedbackWeights, VectorizerParams};
use crate::core::{
	AssetType, Dataset, FeedbackEvent, FeedbackSummary, PerAsset, Recommendation, RunParams, RunReport,
	UserRecommendations,
};
use crate::error::Result;
use crate::processing::feedback::{self, FeedbackLearner};
use crate::processing::ranking::Recommender;
use crate::ui;

/// Knobs of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
	pub top_n: usize,
	pub seed: u64,
	pub positive_ratio: f64,
	pub negative_ratio: f64,
	pub vectorizer: VectorizerParams,
	pub boosts: BoostWeights,
	pub feedback: FeedbackWeights,
}

impl Default for PipelineOptions {
	fn default() -> Self {
		Self {
			top_n: config::DEFAULT_TOP_N,
			seed: config::DEFAULT_SEED,
			positive_ratio: config::POSITIVE_RATIO,
			negative_ratio: config::NEGATIVE_RATIO,
			vectorizer: VectorizerParams::default(),
			boosts: BoostWeights::default(),
			feedback: FeedbackWeights::default(),
		}
	}
}

impl PipelineOptions {
	pub fn params(&self) -> RunParams {
		RunParams {
			top_n: self.top_n,
			seed: self.seed,
			positive_ratio: self.positive_ratio,
			negative_ratio: self.negative_ratio,
			vectorizer: self.vectorizer,
			boosts: self.boosts,
			feedback: self.feedback,
		}
	}
}

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
	/// Recommendations before feedback
	pub raw: PerAsset<Vec<Recommendation>>,
	/// Recommendations after feedback
	pub adjusted: PerAsset<Vec<Recommendation>>,
	pub feedback: Vec<FeedbackEvent>,
	pub users: Vec<UserRecommendations>,
	pub vocabulary_size: usize,
}

impl PipelineOutput {
	pub fn into_report(self, options: &PipelineOptions) -> RunReport {
		RunReport {
			version: env!("CARGO_PKG_VERSION").to_string(),
			timestamp: chrono::Utc::now().to_rfc3339(),
			params: options.params(),
			vocabulary_size: self.vocabulary_size,
			feedback: FeedbackSummary::from_events(&self.feedback),
			users: self.users,
		}
	}
}

/// Run the whole batch over a dataset
///
/// Feedback is simulated once over the flattened recommendations (events,
/// then jobs, then posts) and applied to each asset type's list.
pub fn run(dataset: &Dataset, options: &PipelineOptions) -> Result<PipelineOutput> {
	feedback::validate_ratios(options.positive_ratio, options.negative_ratio)?;

	let recommender = Recommender::build(dataset, &options.vectorizer, options.boosts)?;
	let vocabulary_size = recommender.embeddings().vocabulary().len();
	ui::debug(&format!("Vocabulary size: {}", vocabulary_size));

	let raw = recommender.generate_all(options.top_n)?;

	let flat: Vec<Recommendation> = raw.iter().flat_map(|(_, recs)| recs.iter().cloned()).collect();
	let mut learner = FeedbackLearner::new(options.feedback);
	let mut rng = StdRng::seed_from_u64(options.seed);
	let events = learner.simulate(&flat, options.positive_ratio, options.negative_ratio, &mut rng)?;

	let adjusted = PerAsset::from_fn(|kind| learner.apply(raw.get(kind), &events));
	let users = group_by_user(recommender.user_ids(), &adjusted);

	Ok(PipelineOutput {
		raw,
		adjusted,
		feedback: events,
		users,
		vocabulary_size,
	})
}

/// Per-user view of recommendation lists
///
/// Every listed user gets an entry, in the given order, even without
/// recommendations. Users only present in the lists are appended after.
pub fn group_by_user(user_ids: &[String], recs: &PerAsset<Vec<Recommendation>>) -> Vec<UserRecommendations> {
	let mut grouped: Vec<UserRecommendations> = user_ids
		.iter()
		.map(|id| UserRecommendations {
			user_id: id.clone(),
			recommendations: PerAsset::default(),
		})
		.collect();
	let mut positions: HashMap<String, usize> = user_ids
		.iter()
		.enumerate()
		.map(|(i, id)| (id.clone(), i))
		.collect();

	for kind in AssetType::ALL {
		for rec in recs.get(kind) {
			let pos = *positions.entry(rec.user_id.clone()).or_insert_with(|| {
				grouped.push(UserRecommendations {
					user_id: rec.user_id.clone(),
					recommendations: PerAsset::default(),
				});
				grouped.len() - 1
			});
			grouped[pos].recommendations.get_mut(kind).push(rec.clone());
		}
	}

	grouped
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rec(user: &str, asset: &str, kind: AssetType) -> Recommendation {
		Recommendation {
			user_id: user.into(),
			asset_id: asset.into(),
			asset_type: kind,
			score: 0.5,
			reason: "text-based similarity".into(),
		}
	}

	#[test]
	fn grouping_covers_every_user() {
		let recs = PerAsset {
			events: vec![rec("u1", "e1", AssetType::Event)],
			jobs: vec![rec("u1", "j1", AssetType::Job), rec("u3", "j2", AssetType::Job)],
			posts: Vec::new(),
		};
		let grouped = group_by_user(&["u1".to_string(), "u2".to_string()], &recs);

		let ids: Vec<&str> = grouped.iter().map(|g| g.user_id.as_str()).collect();
		assert_eq!(ids, vec!["u1", "u2", "u3"]);
		assert_eq!(grouped[0].recommendations.events.len(), 1);
		assert_eq!(grouped[0].recommendations.jobs.len(), 1);
		assert!(grouped[1].recommendations.events.is_empty());
		assert_eq!(grouped[2].recommendations.jobs[0].asset_id, "j2");
	}

	#[test]
	fn invalid_ratios_abort_before_work() {
		let options = PipelineOptions {
			positive_ratio: 0.8,
			negative_ratio: 0.8,
			..Default::default()
		};
		assert!(run(&Dataset::default(), &options).is_err());
	}

	#[test]
	fn empty_dataset_is_an_empty_corpus() {
		assert!(matches!(
			run(&Dataset::default(), &PipelineOptions::default()),
			Err(crate::error::RecError::EmptyCorpus { .. })
		));
	}
}
