//! Content fingerprint of a fitted vocabulary

use xxhash_rust::xxh3::Xxh3;

/// Identifies the vocabulary an embedding was produced from.
///
/// Two vocabularies with the same terms in the same order and the same IDF
/// weights share a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VocabHash(u64);

impl VocabHash {
	/// Hash terms and their IDF weights in index order
	pub fn compute<'a>(entries: impl IntoIterator<Item = (&'a str, f32)>) -> Self {
		let mut hasher = Xxh3::new();
		for (term, idf) in entries {
			hasher.update(term.as_bytes());
			hasher.update(&[0]);
			hasher.update(&idf.to_bits().to_le_bytes());
		}
		Self(hasher.digest())
	}

	/// First 8 hex characters for logging
	pub fn short(&self) -> String {
		format!("{:016x}", self.0)[..8].to_string()
	}
}

impl std::fmt::Display for VocabHash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:016x}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_entries_same_hash() {
		let a = VocabHash::compute([("berlin", 1.0), ("meetup", 1.5)]);
		let b = VocabHash::compute([("berlin", 1.0), ("meetup", 1.5)]);
		assert_eq!(a, b);
	}

	#[test]
	fn idf_changes_hash() {
		let a = VocabHash::compute([("berlin", 1.0)]);
		let b = VocabHash::compute([("berlin", 1.2)]);
		assert_ne!(a, b);
	}

	#[test]
	fn term_boundaries_matter() {
		let a = VocabHash::compute([("ab", 1.0), ("c", 1.0)]);
		let b = VocabHash::compute([("a", 1.0), ("bc", 1.0)]);
		assert_ne!(a, b);
	}

	#[test]
	fn display_is_sixteen_hex_chars() {
		let hash = VocabHash::compute([("tech", 1.0)]);
		assert_eq!(hash.to_string().len(), 16);
		assert_eq!(hash.short().len(), 8);
		assert!(hash.to_string().starts_with(&hash.short()));
	}
}
