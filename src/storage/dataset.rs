//! Dataset file loading and report output

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::{AssetType, Dataset, RunReport};
use crate::ui;

/// Load a JSON dataset `{users, events, jobs, posts}`
///
/// Records without an id are dropped, like duplicate ids after the first.
pub fn load(path: &Path) -> Result<Dataset> {
	let text = fs::read_to_string(path).with_context(|| format!("Failed to read dataset {}", path.display()))?;
	let mut dataset: Dataset = serde_json::from_str(&text).context("Failed to parse dataset")?;

	let dropped = dedup_users(&mut dataset);
	if dropped > 0 {
		ui::warn(&format!("Dropped {} users with missing or duplicate ids", dropped));
	}

	for kind in AssetType::ALL {
		let assets = dataset.assets_mut(kind);
		let mut seen = HashSet::new();
		let before = assets.len();
		assets.retain(|a| !a.id.is_empty() && seen.insert(a.id.clone()));
		let dropped = before - assets.len();
		if dropped > 0 {
			ui::warn(&format!("Dropped {} {} with missing or duplicate ids", dropped, kind.plural()));
		}
	}

	ui::debug(&format!(
		"Loaded {} users, {} events, {} jobs, {} posts",
		dataset.users.len(),
		dataset.events.len(),
		dataset.jobs.len(),
		dataset.posts.len()
	));

	Ok(dataset)
}

fn dedup_users(dataset: &mut Dataset) -> usize {
	let mut seen = HashSet::new();
	let before = dataset.users.len();
	dataset.users.retain(|u| !u.user_id.is_empty() && seen.insert(u.user_id.clone()));
	before - dataset.users.len()
}

/// Serialize a run report as pretty JSON
pub fn to_json(report: &RunReport) -> Result<String> {
	serde_json::to_string_pretty(report).context("Failed to serialize report")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
		let path = std::env::temp_dir().join(format!("unirec-{}-{}.json", name, std::process::id()));
		fs::write(&path, content).unwrap();
		path
	}

	#[test]
	fn load_fills_missing_fields_and_drops_bad_ids() {
		let path = write_temp(
			"load",
			r#"{
				"users": [{"user_id": "u1", "city": "Berlin"}, {"city": "nowhere"}, {"user_id": "u1"}],
				"events": [{"event_id": "e1", "title": "Meetup"}, {"title": "no id"}],
				"jobs": [{"job_id": "j1"}]
			}"#,
		);
		let dataset = load(&path).unwrap();
		fs::remove_file(&path).ok();

		assert_eq!(dataset.users.len(), 1);
		assert_eq!(dataset.users[0].interests, "");
		assert_eq!(dataset.events.len(), 1);
		assert_eq!(dataset.jobs[0].id, "j1");
		assert!(dataset.posts.is_empty());
	}

	#[test]
	fn load_reports_malformed_json() {
		let path = write_temp("bad", "{ not json");
		let err = load(&path).unwrap_err();
		fs::remove_file(&path).ok();
		assert!(err.to_string().contains("parse"));
	}

	#[test]
	fn load_reports_missing_file() {
		assert!(load(Path::new("/definitely/not/here.json")).is_err());
	}
}
