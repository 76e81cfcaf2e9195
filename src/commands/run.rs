//! Run command - full batch pipeline

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::time::Instant;

use crate::config;
use crate::processing::{pipeline, PipelineOptions};
use crate::storage;
use crate::ui;

pub fn run(
	dataset_path: &Path,
	top_n: usize,
	positive_ratio: f64,
	negative_ratio: f64,
	json: bool,
) -> Result<()> {
	let start = Instant::now();

	let dataset = storage::load(dataset_path)?;
	ui::info(&format!(
		"Loaded {} users, {} events, {} jobs, {} posts",
		dataset.users.len(),
		dataset.events.len(),
		dataset.jobs.len(),
		dataset.posts.len()
	));

	let options = PipelineOptions {
		top_n,
		seed: config::seed(),
		positive_ratio,
		negative_ratio,
		..Default::default()
	};

	let output = pipeline::run(&dataset, &options).context("Pipeline failed")?;
	let report = output.into_report(&options);

	if json {
		println!("{}", storage::to_json(&report)?);
		return Ok(());
	}

	ui::success(&format!(
		"Vocabulary of {} terms, {} recommendations",
		report.vocabulary_size,
		report.total_recommendations()
	));
	ui::info(&format!(
		"Simulated feedback (seed {}): {} likes, {} dislikes",
		options.seed, report.feedback.likes, report.feedback.dislikes
	));

	ui::header("Top picks");
	for user in &report.users {
		let picks: Vec<String> = user
			.recommendations
			.iter()
			.filter_map(|(kind, recs)| {
				recs.first().map(|r| {
					format!("{} {} {}", kind.singular().dimmed(), r.asset_id.bright_white(), ui::score(r.score))
				})
			})
			.collect();

		let line = if picks.is_empty() {
			"no candidates".dimmed().to_string()
		} else {
			picks.join("  ")
		};
		println!("  {} {}", user.user_id.bright_blue().bold(), line);
	}

	println!();
	ui::success(&format!("Done in {}ms", start.elapsed().as_millis()));

	Ok(())
}
