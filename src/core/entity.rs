//! Entities, input records and text documents

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::TAG_DELIMITER;

/// Kind of entity a document describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
	User,
	Event,
	Job,
	Post,
}

impl EntityType {
	pub const ALL: [EntityType; 4] = [Self::User, Self::Event, Self::Job, Self::Post];

	pub fn label(&self) -> &'static str {
		match self {
			Self::User => "user",
			Self::Event => "event",
			Self::Job => "job",
			Self::Post => "post",
		}
	}
}

impl std::fmt::Display for EntityType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}

/// Recommendable content kinds. Serialized in singular form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
	#[value(name = "events", alias = "event")]
	Event,
	#[value(name = "jobs", alias = "job")]
	Job,
	#[value(name = "posts", alias = "post")]
	Post,
}

impl AssetType {
	pub const ALL: [AssetType; 3] = [Self::Event, Self::Job, Self::Post];

	/// "event", "job", "post"
	pub fn singular(&self) -> &'static str {
		self.entity_type().label()
	}

	/// "events", "jobs", "posts"
	pub fn plural(&self) -> &'static str {
		match self {
			Self::Event => "events",
			Self::Job => "jobs",
			Self::Post => "posts",
		}
	}

	pub fn entity_type(&self) -> EntityType {
		match self {
			Self::Event => EntityType::Event,
			Self::Job => EntityType::Job,
			Self::Post => EntityType::Post,
		}
	}
}

impl std::fmt::Display for AssetType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.singular())
	}
}

/// One value per asset type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerAsset<T> {
	pub events: T,
	pub jobs: T,
	pub posts: T,
}

impl<T> PerAsset<T> {
	pub fn from_fn(mut f: impl FnMut(AssetType) -> T) -> Self {
		Self {
			events: f(AssetType::Event),
			jobs: f(AssetType::Job),
			posts: f(AssetType::Post),
		}
	}

	pub fn get(&self, kind: AssetType) -> &T {
		match kind {
			AssetType::Event => &self.events,
			AssetType::Job => &self.jobs,
			AssetType::Post => &self.posts,
		}
	}

	pub fn get_mut(&mut self, kind: AssetType) -> &mut T {
		match kind {
			AssetType::Event => &mut self.events,
			AssetType::Job => &mut self.jobs,
			AssetType::Post => &mut self.posts,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (AssetType, &T)> {
		AssetType::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
	}
}

/// Text unit fed to the vectorizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	pub id: String,
	pub text: String,
	pub entity_type: EntityType,
}

impl Document {
	pub fn new(id: impl Into<String>, text: impl Into<String>, entity_type: EntityType) -> Self {
		Self {
			id: id.into(),
			text: text.into(),
			entity_type,
		}
	}
}

/// User profile attributes. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
	pub user_id: String,
	pub university: String,
	pub degree: String,
	pub interests: String,
	pub bio: String,
	pub city: String,
}

impl UserRecord {
	/// Profile text: university, degree, interests, bio and city
	pub fn profile_text(&self) -> String {
		[
			self.university.as_str(),
			&self.degree,
			&self.interests,
			&self.bio,
			&self.city,
		]
		.join(" ")
	}

	pub fn document(&self) -> Document {
		Document::new(&self.user_id, self.profile_text(), EntityType::User)
	}
}

/// Event, job or post attributes. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRecord {
	#[serde(alias = "event_id", alias = "job_id", alias = "post_id")]
	pub id: String,
	pub title: String,
	pub description: String,
	pub content: String,
	pub company: String,
	pub category: String,
	pub tags: String,
	pub city: String,
}

impl AssetRecord {
	/// Content text for the asset kind
	pub fn text(&self, kind: AssetType) -> String {
		match kind {
			AssetType::Event => [self.title.as_str(), &self.description, &self.city].join(" "),
			AssetType::Job => [self.title.as_str(), &self.description, &self.company, &self.city].join(" "),
			AssetType::Post => [self.title.as_str(), &self.content, &self.city].join(" "),
		}
	}

	pub fn document(&self, kind: AssetType) -> Document {
		Document::new(&self.id, self.text(kind), kind.entity_type())
	}

	/// Trimmed, non-empty tag tokens
	pub fn tag_tokens(&self) -> impl Iterator<Item = &str> {
		split_tags(&self.tags)
	}
}

pub(crate) fn split_tags(tags: &str) -> impl Iterator<Item = &str> {
	tags.split(TAG_DELIMITER).map(str::trim).filter(|t| !t.is_empty())
}

/// All input records of a pipeline run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
	pub users: Vec<UserRecord>,
	pub events: Vec<AssetRecord>,
	pub jobs: Vec<AssetRecord>,
	pub posts: Vec<AssetRecord>,
}

impl Dataset {
	pub fn assets(&self, kind: AssetType) -> &[AssetRecord] {
		match kind {
			AssetType::Event => &self.events,
			AssetType::Job => &self.jobs,
			AssetType::Post => &self.posts,
		}
	}

	pub fn assets_mut(&mut self, kind: AssetType) -> &mut Vec<AssetRecord> {
		match kind {
			AssetType::Event => &mut self.events,
			AssetType::Job => &mut self.jobs,
			AssetType::Post => &mut self.posts,
		}
	}

	/// Documents of every entity: users, then events, jobs and posts
	pub fn documents(&self) -> Vec<Document> {
		let users = self.users.iter().map(UserRecord::document);
		let assets = AssetType::ALL
			.into_iter()
			.flat_map(|kind| self.assets(kind).iter().map(move |a| a.document(kind)));
		users.chain(assets).collect()
	}

	pub fn user_ids(&self) -> Vec<String> {
		self.users.iter().map(|u| u.user_id.clone()).collect()
	}
}
