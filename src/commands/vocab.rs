//! Vocab command - inspect the shared vocabulary

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::VectorizerParams;
use crate::core::EntityType;
use crate::processing::Embeddings;
use crate::storage;
use crate::ui;

pub fn run(dataset_path: &Path, limit: usize) -> Result<()> {
	let dataset = storage::load(dataset_path)?;
	let embeddings = Embeddings::from_dataset(&dataset, &VectorizerParams::default())?;
	let vocabulary = embeddings.vocabulary();

	ui::success(&format!(
		"{} terms from {} documents (fingerprint {})",
		vocabulary.len(),
		vocabulary.documents(),
		vocabulary.fingerprint().short()
	));

	for entity_type in EntityType::ALL {
		if let Some(space) = embeddings.space(entity_type) {
			let empty = space.zero_count();
			let note = if empty > 0 {
				format!(" ({} without vocabulary terms)", empty).yellow().to_string()
			} else {
				String::new()
			};
			ui::info(&format!("{}: {} vectors{}", entity_type, space.len(), note));
		}
	}

	let mut terms: Vec<(&str, f32)> = vocabulary.iter().collect();
	terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

	ui::header("Rarest terms");
	for (term, idf) in terms.into_iter().take(limit) {
		println!("  {} {}", format!("{:.3}", idf).dimmed(), term.bright_white());
	}

	println!();
	Ok(())
}
