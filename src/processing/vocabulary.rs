//! Shared TF-IDF vocabulary
//!
//! Fitted once on the documents of every entity type so that user and asset
//! vectors live in the same space and compare by dot product.

use std::collections::{HashMap, HashSet};

use crate::config::VectorizerParams;
use crate::core::{Document, Embedding, VocabHash};
use crate::error::{RecError, Result};
use crate::processing::tokenize;
use crate::ui;

/// Immutable term -> (index, idf) mapping
#[derive(Debug, Clone)]
pub struct Vocabulary {
	/// Index -> term, ascending
	terms: Vec<String>,
	index: HashMap<String, usize>,
	idf: Vec<f32>,
	ngram_range: (usize, usize),
	documents: usize,
	fingerprint: VocabHash,
}

impl Vocabulary {
	/// Fit on a corpus
	///
	/// Keeps terms occurring in at least `min_df` documents. When more than
	/// `max_features` remain, the most frequent across the corpus win, ties by
	/// term. IDF is smoothed: `1 + ln((1 + n) / (1 + df))`.
	pub fn fit(documents: &[Document], params: &VectorizerParams) -> Result<Self> {
		let mut doc_freq: HashMap<String, usize> = HashMap::new();
		let mut term_freq: HashMap<String, usize> = HashMap::new();

		for doc in documents {
			let terms = tokenize::terms(&doc.text, params.ngram_range);
			let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
			for term in unique {
				*doc_freq.entry(term.to_string()).or_insert(0) += 1;
			}
			for term in terms {
				*term_freq.entry(term).or_insert(0) += 1;
			}
		}

		let mut kept: Vec<(String, usize)> = doc_freq
			.into_iter()
			.filter(|(_, df)| *df >= params.min_df)
			.collect();

		if kept.len() > params.max_features {
			kept.sort_by(|(a, _), (b, _)| {
				let tf_a = term_freq.get(a).copied().unwrap_or(0);
				let tf_b = term_freq.get(b).copied().unwrap_or(0);
				tf_b.cmp(&tf_a).then_with(|| a.cmp(b))
			});
			kept.truncate(params.max_features);
		}

		if kept.is_empty() {
			return Err(RecError::EmptyCorpus {
				documents: documents.len(),
				min_df: params.min_df,
			});
		}

		kept.sort_by(|(a, _), (b, _)| a.cmp(b));

		let n = documents.len() as f32;
		let idf: Vec<f32> = kept
			.iter()
			.map(|(_, df)| 1.0 + ((1.0 + n) / (1.0 + *df as f32)).ln())
			.collect();
		let terms: Vec<String> = kept.into_iter().map(|(term, _)| term).collect();
		let index = terms
			.iter()
			.enumerate()
			.map(|(i, term)| (term.clone(), i))
			.collect();
		let fingerprint = VocabHash::compute(terms.iter().map(String::as_str).zip(idf.iter().copied()));

		ui::debug(&format!(
			"Vocabulary {}: {} terms from {} documents",
			fingerprint.short(),
			terms.len(),
			documents.len()
		));

		Ok(Self {
			terms,
			index,
			idf,
			ngram_range: params.ngram_range,
			documents: documents.len(),
			fingerprint,
		})
	}

	/// Embed a document
	pub fn transform(&self, document: &Document) -> Embedding {
		self.transform_text(&document.text)
	}

	/// Embed raw text: term counts times IDF, L2-normalized
	pub fn transform_text(&self, text: &str) -> Embedding {
		let mut counts: HashMap<usize, f32> = HashMap::new();
		for term in tokenize::terms(text, self.ngram_range) {
			if let Some(&idx) = self.index.get(&term) {
				*counts.entry(idx).or_insert(0.0) += 1.0;
			}
		}

		if counts.is_empty() {
			return Embedding::zero(self.len(), self.fingerprint);
		}

		let weights = counts
			.into_iter()
			.map(|(idx, count)| (idx, count * self.idf[idx]))
			.collect();
		Embedding::new(weights, self.len(), self.fingerprint)
	}

	pub fn len(&self) -> usize {
		self.terms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	pub fn index_of(&self, term: &str) -> Option<usize> {
		self.index.get(term).copied()
	}

	pub fn term(&self, index: usize) -> Option<&str> {
		self.terms.get(index).map(String::as_str)
	}

	pub fn idf(&self, term: &str) -> Option<f32> {
		self.index_of(term).map(|idx| self.idf[idx])
	}

	/// (term, idf) in index order
	pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
		self.terms.iter().map(String::as_str).zip(self.idf.iter().copied())
	}

	/// Number of documents the vocabulary was fitted on
	pub fn documents(&self) -> usize {
		self.documents
	}

	pub fn fingerprint(&self) -> VocabHash {
		self.fingerprint
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::EntityType;

	fn docs(texts: &[&str]) -> Vec<Document> {
		texts
			.iter()
			.enumerate()
			.map(|(i, t)| Document::new(format!("d{}", i), *t, EntityType::Event))
			.collect()
	}

	#[test]
	fn fit_builds_unigrams_and_bigrams() {
		let vocab = Vocabulary::fit(&docs(&["berlin tech meetup"]), &VectorizerParams::default()).unwrap();
		assert_eq!(vocab.len(), 5);
		assert!(vocab.index_of("tech meetup").is_some());
		assert!(vocab.index_of("berlin meetup").is_none());
	}

	#[test]
	fn terms_are_indexed_alphabetically() {
		let vocab = Vocabulary::fit(&docs(&["zeta alpha"]), &VectorizerParams::default()).unwrap();
		let terms: Vec<&str> = vocab.iter().map(|(t, _)| t).collect();
		assert_eq!(terms, vec!["alpha", "zeta", "zeta alpha"]);
	}

	#[test]
	fn idf_is_smoothed() {
		let vocab = Vocabulary::fit(
			&docs(&["berlin tech", "berlin job", "paris"]),
			&VectorizerParams::default(),
		)
		.unwrap();
		// n = 3, df(berlin) = 2, df(paris) = 1
		let expected_berlin = 1.0 + (4.0f32 / 3.0).ln();
		let expected_paris = 1.0 + (4.0f32 / 2.0).ln();
		assert!((vocab.idf("berlin").unwrap() - expected_berlin).abs() < 1e-6);
		assert!((vocab.idf("paris").unwrap() - expected_paris).abs() < 1e-6);
	}

	#[test]
	fn min_df_filters_rare_terms() {
		let params = VectorizerParams {
			min_df: 2,
			..Default::default()
		};
		let vocab = Vocabulary::fit(&docs(&["berlin tech", "berlin job"]), &params).unwrap();
		let terms: Vec<&str> = vocab.iter().map(|(t, _)| t).collect();
		assert_eq!(terms, vec!["berlin"]);
	}

	#[test]
	fn max_features_keeps_most_frequent() {
		let params = VectorizerParams {
			max_features: 2,
			ngram_range: (1, 1),
			min_df: 1,
		};
		let vocab = Vocabulary::fit(&docs(&["rust rust go", "rust go java", "python"]), &params).unwrap();
		let terms: Vec<&str> = vocab.iter().map(|(t, _)| t).collect();
		assert_eq!(terms, vec!["go", "rust"]);
	}

	#[test]
	fn max_features_ties_break_by_term() {
		let params = VectorizerParams {
			max_features: 2,
			ngram_range: (1, 1),
			min_df: 1,
		};
		let vocab = Vocabulary::fit(&docs(&["delta charlie bravo alpha"]), &params).unwrap();
		let terms: Vec<&str> = vocab.iter().map(|(t, _)| t).collect();
		assert_eq!(terms, vec!["alpha", "bravo"]);
		assert_eq!(vocab.term(0), Some("alpha"));
		assert_eq!(vocab.term(2), None);
	}

	#[test]
	fn empty_corpus_is_an_error() {
		let err = Vocabulary::fit(&docs(&["", "a", "!!"]), &VectorizerParams::default()).unwrap_err();
		assert!(matches!(err, RecError::EmptyCorpus { documents: 3, .. }));
		assert!(Vocabulary::fit(&[], &VectorizerParams::default()).is_err());
	}

	#[test]
	fn min_df_above_corpus_is_an_error() {
		let params = VectorizerParams {
			min_df: 5,
			..Default::default()
		};
		assert!(matches!(
			Vocabulary::fit(&docs(&["berlin", "berlin"]), &params),
			Err(RecError::EmptyCorpus { .. })
		));
	}

	#[test]
	fn transform_is_unit_norm_or_zero() {
		let corpus = docs(&["berlin tech meetup", "berlin job opening", ""]);
		let vocab = Vocabulary::fit(&corpus, &VectorizerParams::default()).unwrap();

		for doc in &corpus[..2] {
			let emb = vocab.transform(doc);
			assert!((emb.norm() - 1.0).abs() < 1e-6);
			assert_eq!(emb.dim(), vocab.len());
			assert_eq!(emb.vocab(), vocab.fingerprint());
		}
		assert!(vocab.transform(&corpus[2]).is_zero());
		assert!(vocab.transform_text("unknown words only").is_zero());
	}

	#[test]
	fn transform_weights_by_count_and_idf() {
		let vocab = Vocabulary::fit(
			&docs(&["berlin tech", "berlin job"]),
			&VectorizerParams {
				ngram_range: (1, 1),
				..Default::default()
			},
		)
		.unwrap();
		let emb = vocab.transform_text("berlin berlin tech");
		let berlin = 2.0 * vocab.idf("berlin").unwrap();
		let tech = vocab.idf("tech").unwrap();
		let norm = (berlin * berlin + tech * tech).sqrt();
		let idx = vocab.index_of("berlin").unwrap();
		assert!((emb.get(idx) - berlin / norm).abs() < 1e-6);
	}

	#[test]
	fn identical_texts_have_similarity_one() {
		let vocab = Vocabulary::fit(&docs(&["berlin tech meetup", "berlin job"]), &VectorizerParams::default()).unwrap();
		let a = vocab.transform_text("berlin tech meetup");
		let b = vocab.transform_text("Berlin, tech meetup");
		assert!((a.similarity(&b) - 1.0).abs() < 1e-6);
	}

	#[test]
	fn fingerprint_depends_on_corpus() {
		let params = VectorizerParams::default();
		let a = Vocabulary::fit(&docs(&["berlin tech"]), &params).unwrap();
		let b = Vocabulary::fit(&docs(&["berlin tech"]), &params).unwrap();
		let c = Vocabulary::fit(&docs(&["berlin tech", "paris"]), &params).unwrap();
		assert_eq!(a.fingerprint(), b.fingerprint());
		assert_ne!(a.fingerprint(), c.fingerprint());
	}
}
