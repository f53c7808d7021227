use std::sync::Arc;

use uuid::Uuid;

use crate::{Error, Result, SavedSearchStore, SearchHistory};
use hire_config::{Config, STORAGE_BACKEND_FILE, STORAGE_BACKEND_MEMORY};
use hire_domain::{CompiledQuery, Query, SearchRecord, ValidationError};
use hire_storage::{
	SAVED_SEARCHES_KEY, SEARCH_HISTORY_KEY,
	kv::{FileStore, KeyValueStore, MemoryStore},
	models::{SavedSearch, SearchHistoryEntry},
	repository::JsonCollection,
};

/// Entry point for search callers: evaluation plus saved searches and history.
pub struct SearchService {
	pub saved_searches: SavedSearchStore,
	pub history: SearchHistory,
}
impl SearchService {
	pub fn open(cfg: &Config) -> Result<Self> {
		let store: Arc<dyn KeyValueStore> = match cfg.storage.backend.as_str() {
			STORAGE_BACKEND_FILE => {
				let data_dir = cfg.storage.data_dir.as_deref().ok_or_else(|| {
					Error::InvalidRequest { message: "storage.data_dir is required.".to_string() }
				})?;

				Arc::new(FileStore::open(data_dir)?)
			},
			STORAGE_BACKEND_MEMORY => Arc::new(MemoryStore::new()),
			other => {
				return Err(Error::InvalidRequest {
					message: format!("unsupported storage backend '{other}'."),
				});
			},
		};

		Ok(Self::with_store(store, cfg))
	}

	pub fn with_store(store: Arc<dyn KeyValueStore>, cfg: &Config) -> Self {
		let saved_searches = SavedSearchStore::new(
			Arc::new(JsonCollection::<SavedSearch>::new(store.clone(), SAVED_SEARCHES_KEY)),
			cfg.saved_searches.seed_examples,
		);
		let history = SearchHistory::new(
			Arc::new(JsonCollection::<SearchHistoryEntry>::new(store, SEARCH_HISTORY_KEY)),
			cfg.history.retention,
			cfg.history.display_limit,
		);

		Self { saved_searches, history }
	}

	/// Filters `records` and logs the search in history.
	pub fn run_query<R>(&self, records: &[R], query: &Query, search_text: &str) -> Result<Vec<R>>
	where
		R: SearchRecord + Clone,
	{
		let matched = CompiledQuery::new(&query.groups, query.global_operator).filter(records);

		tracing::debug!(
			total = records.len(),
			matched = matched.len(),
			groups = query.groups.len(),
			conditions = query.condition_count(),
			"Query evaluated."
		);

		self.history.append(search_text, query.clone(), matched.len())?;

		Ok(matched)
	}

	/// Re-applies a saved search: counts the use, filters, and logs history.
	///
	/// Returns `None` without side effects when the saved search does not exist.
	pub fn apply_saved_search<R>(&self, id: Uuid, records: &[R]) -> Result<Option<Vec<R>>>
	where
		R: SearchRecord + Clone,
	{
		let Some(search) = self.saved_searches.record_usage(id)? else {
			return Ok(None);
		};

		self.run_query(records, &search.query(), &search.name).map(Some)
	}

	/// Validates the name, then stores the query under it.
	pub fn create_saved_search(
		&self,
		name: &str,
		query: Query,
		description: Option<String>,
	) -> Result<SavedSearch> {
		let name = hire_domain::validate_search_name(name)?;
		let description =
			description.map(|text| text.trim().to_string()).filter(|text| !text.is_empty());

		self.saved_searches.create(name, query.groups, query.global_operator, description)
	}

	/// Conditions in `query` that can never match.
	pub fn explain(&self, query: &Query) -> Vec<ValidationError> {
		hire_domain::inspect_query(query)
	}
}
