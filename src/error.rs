//! Error taxonomy for the recommendation core
//!
//! The library returns [`RecError`]; commands wrap it in `anyhow` with context.

use thiserror::Error;

use crate::core::{EntityType, VocabHash};

#[derive(Debug, Error)]
pub enum RecError {
	/// No document produced a term that survives the document-frequency cut.
	#[error("empty vocabulary: no term appears in at least {min_df} of {documents} documents")]
	EmptyCorpus { documents: usize, min_df: usize },

	/// Ranking was requested for a user absent from the user embedding space.
	#[error("unknown user '{0}'")]
	UnknownUser(String),

	/// Feedback ratios outside [0, 1] or summing above 1.
	#[error("invalid feedback ratios (positive {positive}, negative {negative}): each must lie in [0, 1] and their sum must not exceed 1")]
	InvalidRatio { positive: f64, negative: f64 },

	/// A vector built from another vocabulary reached the ranking engine.
	#[error("embedding built from vocabulary {found}, ranking expects vocabulary {expected}")]
	DimensionMismatch { expected: VocabHash, found: VocabHash },

	/// A ranked entity has no vector in the embeddings the ranker was given.
	#[error("no {entity_type} embedding for '{id}': dataset and embeddings were built from different inputs")]
	MissingVector { entity_type: EntityType, id: String },
}

pub type Result<T> = std::result::Result<T, RecError>;
