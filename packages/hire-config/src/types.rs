use std::path::PathBuf;

use serde::Deserialize;

pub const STORAGE_BACKEND_FILE: &str = "file";
pub const STORAGE_BACKEND_MEMORY: &str = "memory";

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub saved_searches: SavedSearches,
	#[serde(default)]
	pub history: History,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	/// Either "file" or "memory".
	pub backend: String,
	/// Directory holding one JSON document per collection. Required for the file backend.
	pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SavedSearches {
	/// Seed the example searches the first time the collection is read.
	pub seed_examples: bool,
}
impl Default for SavedSearches {
	fn default() -> Self {
		Self { seed_examples: true }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct History {
	pub retention: usize,
	pub display_limit: usize,
}
impl Default for History {
	fn default() -> Self {
		Self { retention: 50, display_limit: 20 }
	}
}
