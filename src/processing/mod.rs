//! Embedding, ranking and feedback processing

pub mod boost;
pub mod feedback;
pub mod pipeline;
pub mod popularity;
pub mod ranking;
pub mod space;
pub mod tokenize;
pub mod vocabulary;

pub use feedback::FeedbackLearner;
pub use pipeline::{PipelineOptions, PipelineOutput};
pub use ranking::{Recommender, ScoreSource, ScoredAsset};
pub use space::{EmbeddingSpace, Embeddings};
pub use vocabulary::Vocabulary;
