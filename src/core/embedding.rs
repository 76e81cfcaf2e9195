//! Sparse, unit-normalized TF-IDF vectors

use crate::core::VocabHash;
use crate::error::{RecError, Result};

/// Sparse embedding in a shared vocabulary space.
///
/// Entries are `(term_index, weight)` pairs sorted by index with no zero
/// weights. The vector has unit L2 norm, or no entries at all when the source
/// text contained no vocabulary term (the cold-start signal).
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
	entries: Vec<(usize, f32)>,
	dim: usize,
	vocab: VocabHash,
}

impl Embedding {
	/// Create normalized embedding from raw term weights
	pub fn new(mut entries: Vec<(usize, f32)>, dim: usize, vocab: VocabHash) -> Self {
		entries.retain(|&(_, w)| w != 0.0);
		entries.sort_by_key(|&(idx, _)| idx);
		normalize(&mut entries);
		Self { entries, dim, vocab }
	}

	/// All-zero vector
	pub fn zero(dim: usize, vocab: VocabHash) -> Self {
		Self {
			entries: Vec::new(),
			dim,
			vocab,
		}
	}

	pub fn is_zero(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[(usize, f32)] {
		&self.entries
	}

	pub fn dim(&self) -> usize {
		self.dim
	}

	pub fn vocab(&self) -> VocabHash {
		self.vocab
	}

	/// Weight at a term index (0.0 when absent)
	pub fn get(&self, index: usize) -> f32 {
		self.entries
			.binary_search_by_key(&index, |&(idx, _)| idx)
			.map(|pos| self.entries[pos].1)
			.unwrap_or(0.0)
	}

	pub fn norm(&self) -> f32 {
		self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
	}

	/// Cosine similarity [0.0, 1.0]
	pub fn similarity(&self, other: &Self) -> f32 {
		let (mut i, mut j) = (0, 0);
		let mut dot = 0.0;
		while i < self.entries.len() && j < other.entries.len() {
			let (a_idx, a_w) = self.entries[i];
			let (b_idx, b_w) = other.entries[j];
			match a_idx.cmp(&b_idx) {
				std::cmp::Ordering::Less => i += 1,
				std::cmp::Ordering::Greater => j += 1,
				std::cmp::Ordering::Equal => {
					dot += a_w * b_w;
					i += 1;
					j += 1;
				}
			}
		}
		dot
	}

	/// Cosine similarity, refusing vectors from different vocabularies
	pub fn checked_similarity(&self, other: &Self) -> Result<f32> {
		if self.vocab != other.vocab || self.dim != other.dim {
			return Err(RecError::DimensionMismatch {
				expected: self.vocab,
				found: other.vocab,
			});
		}
		Ok(self.similarity(other))
	}
}

fn normalize(v: &mut [(usize, f32)]) {
	let norm: f32 = v.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
	if norm > 0.0 {
		for (_, w) in v.iter_mut() {
			*w /= norm;
		}
	}
}
