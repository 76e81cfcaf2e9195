//! Core domain types

pub mod embedding;
pub mod entity;
pub mod hash;
pub mod recommendation;

pub use embedding::Embedding;
pub use entity::{AssetRecord, AssetType, Dataset, Document, EntityType, PerAsset, UserRecord};
pub use hash::VocabHash;
pub use recommendation::{
	FeedbackEvent, FeedbackSummary, Recommendation, RunParams, RunReport, Signal, UserRecommendations,
};
