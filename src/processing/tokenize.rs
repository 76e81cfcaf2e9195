//! Word tokenization and n-gram extraction

/// Lowercase word tokens: runs of alphanumerics or '_' with at least 2 characters
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !(c.is_alphanumeric() || c == '_'))
		.filter(|w| w.chars().count() >= 2)
		.map(str::to_string)
		.collect()
}

/// Contiguous n-grams of tokens for every n in `range` (inclusive), joined with a space
pub fn ngrams(tokens: &[String], range: (usize, usize)) -> Vec<String> {
	let (min_n, max_n) = range;
	let mut terms = Vec::new();
	for n in min_n.max(1)..=max_n {
		terms.extend(tokens.windows(n).map(|window| window.join(" ")));
	}
	terms
}

/// Terms of a text: tokenize, then expand to n-grams
pub fn terms(text: &str, range: (usize, usize)) -> Vec<String> {
	ngrams(&tokenize(text), range)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokenize_lowercases_and_splits() {
		assert_eq!(tokenize("Berlin Tech-Meetup!"), vec!["berlin", "tech", "meetup"]);
	}

	#[test]
	fn tokenize_drops_single_chars() {
		assert_eq!(tokenize("a b cd e"), vec!["cd"]);
	}

	#[test]
	fn tokenize_keeps_underscores_and_digits() {
		assert_eq!(tokenize("rust_lang 2024"), vec!["rust_lang", "2024"]);
	}

	#[test]
	fn tokenize_counts_characters_not_bytes() {
		assert_eq!(tokenize("é ü münchen"), vec!["münchen"]);
	}

	#[test]
	fn ngrams_unigrams_and_bigrams() {
		let tokens = tokenize("berlin tech meetup");
		assert_eq!(
			ngrams(&tokens, (1, 2)),
			vec!["berlin", "tech", "meetup", "berlin tech", "tech meetup"]
		);
	}

	#[test]
	fn ngrams_of_short_input() {
		assert_eq!(terms("rust", (1, 2)), vec!["rust"]);
		assert!(terms("", (1, 2)).is_empty());
	}
}
