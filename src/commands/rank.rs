//! Rank command - recommendations for a single user

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::{BoostWeights, VectorizerParams};
use crate::core::AssetType;
use crate::error::RecError;
use crate::processing::ranking::{sort_scored, Recommender};
use crate::storage;
use crate::ui;

pub fn run(dataset_path: &Path, user_id: &str, asset_type: AssetType, top_n: usize, json: bool) -> Result<()> {
	let dataset = storage::load(dataset_path)?;
	let recommender = Recommender::build(&dataset, &VectorizerParams::default(), BoostWeights::default())?;

	if json {
		let recs = match recommender.rank(user_id, asset_type, top_n) {
			Ok(recs) => recs,
			Err(RecError::UnknownUser(id)) => {
				ui::warn(&format!("Unknown user '{}', skipping", id));
				Vec::new()
			}
			Err(e) => return Err(e.into()),
		};
		println!("{}", serde_json::to_string_pretty(&recs)?);
		return Ok(());
	}

	let (source, mut scored) = match recommender.score_candidates(user_id, asset_type) {
		Ok(result) => result,
		Err(RecError::UnknownUser(id)) => {
			ui::warn(&format!("Unknown user '{}', skipping", id));
			return Ok(());
		}
		Err(e) => return Err(e.into()),
	};
	sort_scored(&mut scored);
	scored.truncate(top_n);

	if scored.is_empty() {
		ui::warn(&format!("No {} to rank", asset_type.plural()));
		return Ok(());
	}

	ui::info(&format!(
		"Top {} for {} ({})",
		asset_type.plural(),
		user_id.bright_blue(),
		source.reason()
	));
	ui::header("Results");

	for (i, s) in scored.iter().enumerate() {
		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			s.asset_id.bright_white(),
			ui::score(s.score),
			format!("(base {:.3} + boost {:.2})", s.base, s.boost).dimmed()
		);
	}

	println!();
	Ok(())
}
