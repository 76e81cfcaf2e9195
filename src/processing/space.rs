//! Embedding spaces: per-entity vectors over one shared vocabulary

use std::collections::HashMap;

use rayon::prelude::*;

use crate::config::VectorizerParams;
use crate::core::{Dataset, Document, Embedding, EntityType};
use crate::error::Result;
use crate::processing::Vocabulary;
use crate::ui;

/// Ordered ids paired 1:1 with their embeddings
#[derive(Debug, Clone)]
pub struct EmbeddingSpace {
	entity_type: EntityType,
	ids: Vec<String>,
	vectors: Vec<Embedding>,
	positions: HashMap<String, usize>,
}

impl EmbeddingSpace {
	/// Embed documents in parallel, keeping input order
	pub fn build(entity_type: EntityType, documents: &[&Document], vocabulary: &Vocabulary) -> Self {
		let vectors: Vec<Embedding> = documents
			.par_iter()
			.map(|doc| vocabulary.transform(doc))
			.collect();
		let ids: Vec<String> = documents.iter().map(|doc| doc.id.clone()).collect();
		let positions = ids
			.iter()
			.enumerate()
			.map(|(i, id)| (id.clone(), i))
			.collect();

		Self {
			entity_type,
			ids,
			vectors,
			positions,
		}
	}

	pub fn entity_type(&self) -> EntityType {
		self.entity_type
	}

	pub fn ids(&self) -> &[String] {
		&self.ids
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn position(&self, id: &str) -> Option<usize> {
		self.positions.get(id).copied()
	}

	pub fn get(&self, id: &str) -> Option<&Embedding> {
		self.position(id).map(|pos| &self.vectors[pos])
	}

	/// Entries with no vocabulary term
	pub fn zero_count(&self) -> usize {
		self.vectors.iter().filter(|v| v.is_zero()).count()
	}
}

/// Vocabulary plus one embedding space per entity type. Read-only once built.
#[derive(Debug, Clone)]
pub struct Embeddings {
	vocabulary: Vocabulary,
	spaces: HashMap<EntityType, EmbeddingSpace>,
}

impl Embeddings {
	/// Fit on the union of all documents, then embed each entity type
	///
	/// Document order within a type is preserved in its space.
	pub fn from_documents(documents: &[Document], params: &VectorizerParams) -> Result<Self> {
		let vocabulary = Vocabulary::fit(documents, params)?;

		let spaces = EntityType::ALL
			.into_iter()
			.map(|entity_type| {
				let docs: Vec<&Document> = documents
					.iter()
					.filter(|d| d.entity_type == entity_type)
					.collect();
				let space = EmbeddingSpace::build(entity_type, &docs, &vocabulary);
				if space.zero_count() > 0 {
					ui::debug(&format!(
						"{} of {} {} vectors are empty",
						space.zero_count(),
						space.len(),
						space.entity_type()
					));
				}
				(entity_type, space)
			})
			.collect();

		Ok(Self { vocabulary, spaces })
	}

	/// Build from the texts of every record in a dataset
	pub fn from_dataset(dataset: &Dataset, params: &VectorizerParams) -> Result<Self> {
		Self::from_documents(&dataset.documents(), params)
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Space of an entity type (empty when there were no such documents)
	pub fn space(&self, entity_type: EntityType) -> Option<&EmbeddingSpace> {
		self.spaces.get(&entity_type)
	}

	/// Vector of an entity, if it exists
	pub fn vector_for(&self, entity_type: EntityType, id: &str) -> Option<&Embedding> {
		self.space(entity_type).and_then(|space| space.get(id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn documents() -> Vec<Document> {
		vec![
			Document::new("u1", "berlin tech meetup", EntityType::User),
			Document::new("e1", "berlin tech meetup", EntityType::Event),
			Document::new("j1", "berlin job opening", EntityType::Job),
			Document::new("u2", "", EntityType::User),
		]
	}

	#[test]
	fn spaces_share_one_vocabulary() {
		let embeddings = Embeddings::from_documents(&documents(), &VectorizerParams::default()).unwrap();
		let user = embeddings.vector_for(EntityType::User, "u1").unwrap();
		let event = embeddings.vector_for(EntityType::Event, "e1").unwrap();
		let job = embeddings.vector_for(EntityType::Job, "j1").unwrap();

		assert_eq!(user.vocab(), embeddings.vocabulary().fingerprint());
		assert_eq!(job.vocab(), event.vocab());
		assert!((user.checked_similarity(event).unwrap() - 1.0).abs() < 1e-6);
		assert!(user.similarity(job) > 0.0);
		assert!(user.similarity(job) < 1.0);
	}

	#[test]
	fn empty_text_embeds_to_zero() {
		let embeddings = Embeddings::from_documents(&documents(), &VectorizerParams::default()).unwrap();
		assert!(embeddings.vector_for(EntityType::User, "u2").unwrap().is_zero());
	}

	#[test]
	fn space_keeps_input_order() {
		let embeddings = Embeddings::from_documents(&documents(), &VectorizerParams::default()).unwrap();
		let users = embeddings.space(EntityType::User).unwrap();
		assert_eq!(users.entity_type(), EntityType::User);
		assert_eq!(users.ids(), &["u1".to_string(), "u2".to_string()]);
		assert_eq!(users.position("u2"), Some(1));
		assert_eq!(users.zero_count(), 1);
	}

	#[test]
	fn missing_entities_yield_none() {
		let embeddings = Embeddings::from_documents(&documents(), &VectorizerParams::default()).unwrap();
		assert!(embeddings.vector_for(EntityType::Event, "nope").is_none());
		assert!(embeddings.space(EntityType::Post).unwrap().is_empty());
	}
}
