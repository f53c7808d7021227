use std::sync::{Arc, Mutex};

use time::OffsetDateTime;
use uuid::Uuid;

use crate::Result;
use hire_domain::Query;
use hire_storage::{models::SearchHistoryEntry, repository::Repository};

/// Recent searches, newest first, truncated to `retention` entries on every append.
pub struct SearchHistory {
	repo: Arc<dyn Repository<SearchHistoryEntry>>,
	retention: usize,
	display_limit: usize,
	lock: Mutex<()>,
}
impl SearchHistory {
	pub fn new(
		repo: Arc<dyn Repository<SearchHistoryEntry>>,
		retention: usize,
		display_limit: usize,
	) -> Self {
		Self { repo, retention, display_limit, lock: Mutex::new(()) }
	}

	pub fn append(
		&self,
		search_query: &str,
		filters: Query,
		result_count: usize,
	) -> Result<SearchHistoryEntry> {
		let _guard = self.lock.lock().unwrap_or_else(|err| err.into_inner());
		let mut entries = self.repo.load()?.unwrap_or_default();
		let entry = SearchHistoryEntry {
			id: Uuid::new_v4(),
			search_query: search_query.to_string(),
			filters,
			timestamp: OffsetDateTime::now_utc(),
			result_count,
		};

		entries.insert(0, entry.clone());
		entries.truncate(self.retention);

		self.repo.save(&entries)?;

		tracing::debug!(history_id = %entry.id, result_count, "Search history appended.");

		Ok(entry)
	}

	/// Newest entries first; `limit` defaults to the configured display limit.
	pub fn list(&self, limit: Option<usize>) -> Result<Vec<SearchHistoryEntry>> {
		let _guard = self.lock.lock().unwrap_or_else(|err| err.into_inner());
		let mut entries = self.repo.load()?.unwrap_or_default();

		entries.truncate(limit.unwrap_or(self.display_limit));

		Ok(entries)
	}

	pub fn clear(&self) -> Result<()> {
		let _guard = self.lock.lock().unwrap_or_else(|err| err.into_inner());

		self.repo.save(&[])?;

		tracing::debug!("Search history cleared.");

		Ok(())
	}
}
