//! Ranking engine: similarity or popularity, plus boosts, top-N per user

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::config::{BoostWeights, VectorizerParams};
use crate::core::recommendation::{REASON_POPULARITY, REASON_SIMILARITY};
use crate::core::{AssetType, Dataset, Embedding, EntityType, PerAsset, Recommendation};
use crate::error::{RecError, Result};
use crate::processing::boost::{self, AssetProfile, UserProfile};
use crate::processing::space::{EmbeddingSpace, Embeddings};
use crate::processing::popularity;

/// Where a candidate's base score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
	Similarity,
	Popularity,
}

impl ScoreSource {
	pub fn reason(&self) -> &'static str {
		match self {
			Self::Similarity => REASON_SIMILARITY,
			Self::Popularity => REASON_POPULARITY,
		}
	}
}

/// One candidate with its score broken down
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAsset {
	pub asset_id: String,
	pub base: f32,
	pub boost: f32,
	pub score: f32,
}

#[derive(Debug, Clone)]
struct Candidate {
	id: String,
	profile: AssetProfile,
}

/// Read-only ranking state: embeddings, popularity and pre-indexed profiles
#[derive(Debug, Clone)]
pub struct Recommender {
	embeddings: Embeddings,
	users: HashMap<String, UserProfile>,
	user_order: Vec<String>,
	candidates: PerAsset<Vec<Candidate>>,
	popularity: PerAsset<HashMap<String, f32>>,
	weights: BoostWeights,
}

impl Recommender {
	/// Fit embeddings on the dataset and index it for ranking
	pub fn build(dataset: &Dataset, params: &VectorizerParams, weights: BoostWeights) -> Result<Self> {
		let embeddings = Embeddings::from_dataset(dataset, params)?;
		Self::new(dataset, embeddings, weights)
	}

	/// Index a dataset against embeddings built from it
	///
	/// Every user and asset of the dataset must have a vector from the
	/// embeddings' vocabulary, otherwise `MissingVector` or `DimensionMismatch`.
	pub fn new(dataset: &Dataset, embeddings: Embeddings, weights: BoostWeights) -> Result<Self> {
		check_coverage(dataset, &embeddings)?;

		let users = dataset
			.users
			.iter()
			.map(|u| (u.user_id.clone(), UserProfile::from_record(u)))
			.collect();

		let candidates = PerAsset::from_fn(|kind| {
			dataset
				.assets(kind)
				.iter()
				.map(|a| Candidate {
					id: a.id.clone(),
					profile: AssetProfile::from_record(a),
				})
				.collect()
		});

		let popularity = PerAsset::from_fn(|kind| popularity::score(dataset.assets(kind)));

		Ok(Self {
			embeddings,
			users,
			user_order: dataset.user_ids(),
			candidates,
			popularity,
			weights,
		})
	}

	pub fn embeddings(&self) -> &Embeddings {
		&self.embeddings
	}

	/// Popularity table of an asset type
	pub fn popularity(&self, kind: AssetType) -> &HashMap<String, f32> {
		self.popularity.get(kind)
	}

	/// User ids in input order
	pub fn user_ids(&self) -> &[String] {
		&self.user_order
	}

	/// Score every candidate of `kind` for a user, unsorted
	pub fn score_candidates(&self, user_id: &str, kind: AssetType) -> Result<(ScoreSource, Vec<ScoredAsset>)> {
		let (user_vec, profile) = self.lookup_user(user_id)?;
		let source = if user_vec.is_zero() {
			ScoreSource::Popularity
		} else {
			ScoreSource::Similarity
		};

		let space = self.asset_space(kind);
		let popularity = self.popularity.get(kind);

		let scored = self
			.candidates
			.get(kind)
			.iter()
			.map(|candidate| -> Result<ScoredAsset> {
				let base = match source {
					ScoreSource::Popularity => popularity.get(&candidate.id).copied().unwrap_or(0.0),
					ScoreSource::Similarity => {
						let vector = space.and_then(|s| s.get(&candidate.id)).ok_or_else(|| {
							RecError::MissingVector {
								entity_type: kind.entity_type(),
								id: candidate.id.clone(),
							}
						})?;
						user_vec.checked_similarity(vector)?
					}
				};
				let boost = boost::boost(profile, &candidate.profile, &self.weights);
				Ok(ScoredAsset {
					asset_id: candidate.id.clone(),
					base,
					boost,
					score: base + boost,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok((source, scored))
	}

	/// Top `top_n` assets of `kind` for a user
	///
	/// Ordered by final score descending, ties by ascending asset id.
	pub fn rank(&self, user_id: &str, kind: AssetType, top_n: usize) -> Result<Vec<Recommendation>> {
		let (source, mut scored) = self.score_candidates(user_id, kind)?;
		sort_scored(&mut scored);

		Ok(scored
			.into_iter()
			.take(top_n)
			.map(|s| Recommendation {
				user_id: user_id.to_string(),
				asset_id: s.asset_id,
				asset_type: kind,
				score: s.score,
				reason: source.reason().to_string(),
			})
			.collect())
	}

	/// Rank every user against every asset type, users processed in parallel
	///
	/// Each list holds users in input order, each user's entries in rank order.
	pub fn generate_all(&self, top_n: usize) -> Result<PerAsset<Vec<Recommendation>>> {
		let per_user: Vec<PerAsset<Vec<Recommendation>>> = self
			.user_order
			.par_iter()
			.map(|user_id| -> Result<PerAsset<Vec<Recommendation>>> {
				Ok(PerAsset {
					events: self.rank(user_id, AssetType::Event, top_n)?,
					jobs: self.rank(user_id, AssetType::Job, top_n)?,
					posts: self.rank(user_id, AssetType::Post, top_n)?,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		let mut all: PerAsset<Vec<Recommendation>> = PerAsset::default();
		for user in per_user {
			all.events.extend(user.events);
			all.jobs.extend(user.jobs);
			all.posts.extend(user.posts);
		}
		Ok(all)
	}

	fn lookup_user(&self, user_id: &str) -> Result<(&Embedding, &UserProfile)> {
		let vector = self
			.embeddings
			.vector_for(EntityType::User, user_id)
			.ok_or_else(|| RecError::UnknownUser(user_id.to_string()))?;
		let profile = self
			.users
			.get(user_id)
			.ok_or_else(|| RecError::UnknownUser(user_id.to_string()))?;

		let expected = self.embeddings.vocabulary().fingerprint();
		if vector.vocab() != expected {
			return Err(RecError::DimensionMismatch {
				expected,
				found: vector.vocab(),
			});
		}

		Ok((vector, profile))
	}

	fn asset_space(&self, kind: AssetType) -> Option<&EmbeddingSpace> {
		self.embeddings.space(kind.entity_type())
	}
}

fn check_coverage(dataset: &Dataset, embeddings: &Embeddings) -> Result<()> {
	let expected = embeddings.vocabulary().fingerprint();
	let users = dataset.users.iter().map(|u| (EntityType::User, u.user_id.as_str()));
	let assets = AssetType::ALL
		.into_iter()
		.flat_map(|kind| dataset.assets(kind).iter().map(move |a| (kind.entity_type(), a.id.as_str())));

	for (entity_type, id) in users.chain(assets) {
		let vector = embeddings
			.vector_for(entity_type, id)
			.ok_or_else(|| RecError::MissingVector {
				entity_type,
				id: id.to_string(),
			})?;
		if vector.vocab() != expected {
			return Err(RecError::DimensionMismatch {
				expected,
				found: vector.vocab(),
			});
		}
	}
	Ok(())
}

/// Score descending, then asset id ascending
pub fn sort_scored(scored: &mut [ScoredAsset]) {
	scored.sort_by(|a, b| compare(a.score, &a.asset_id, b.score, &b.asset_id));
}

fn compare(score_a: f32, id_a: &str, score_b: f32, id_b: &str) -> Ordering {
	score_b.total_cmp(&score_a).then_with(|| id_a.cmp(id_b))
}
