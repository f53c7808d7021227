use std::{
	cmp::Ordering,
	sync::{Arc, Mutex, MutexGuard},
};

use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Result, seed};
use hire_domain::{Group, LogicalOperator};
use hire_storage::{models::SavedSearch, repository::Repository};

/// Fields a caller may change on an existing saved search.
///
/// Usage statistics and server-assigned fields are not patchable.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearchPatch {
	pub name: Option<String>,
	/// `Some(None)` clears the description; an absent key leaves it unchanged.
	#[serde(default, deserialize_with = "present")]
	pub description: Option<Option<String>>,
	pub groups: Option<Vec<Group>>,
	pub global_operator: Option<LogicalOperator>,
	pub is_default: Option<bool>,
}
impl SavedSearchPatch {
	fn apply(self, target: &mut SavedSearch) {
		if let Some(name) = self.name {
			target.name = name;
		}
		if let Some(description) = self.description {
			target.description = description;
		}
		if let Some(groups) = self.groups {
			target.groups = groups;
		}
		if let Some(global_operator) = self.global_operator {
			target.global_operator = global_operator;
		}
		if let Some(is_default) = self.is_default {
			target.is_default = Some(is_default);
		}
	}
}

/// Maps a present key, `null` included, to `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

/// Durable collection of named queries.
///
/// Every mutation is one read-modify-write of the whole collection, serialized by `lock`.
/// The store does not validate what it is given.
pub struct SavedSearchStore {
	repo: Arc<dyn Repository<SavedSearch>>,
	seed_examples: bool,
	lock: Mutex<()>,
}
impl SavedSearchStore {
	pub fn new(repo: Arc<dyn Repository<SavedSearch>>, seed_examples: bool) -> Self {
		Self { repo, seed_examples, lock: Mutex::new(()) }
	}

	pub fn list(&self) -> Result<Vec<SavedSearch>> {
		let _guard = self.lock();

		self.load_or_seed()
	}

	pub fn get(&self, id: Uuid) -> Result<Option<SavedSearch>> {
		Ok(self.list()?.into_iter().find(|search| search.id == id))
	}

	pub fn create(
		&self,
		name: String,
		groups: Vec<Group>,
		global_operator: LogicalOperator,
		description: Option<String>,
	) -> Result<SavedSearch> {
		let _guard = self.lock();
		let mut searches = self.load_or_seed()?;
		let now = OffsetDateTime::now_utc();
		let created = SavedSearch {
			id: Uuid::new_v4(),
			name,
			description,
			groups,
			global_operator,
			is_default: None,
			created_at: now,
			updated_at: now,
			last_used: None,
			use_count: 0,
		};

		searches.push(created.clone());
		self.repo.save(&searches)?;

		tracing::debug!(saved_search_id = %created.id, "Saved search created.");

		Ok(created)
	}

	/// Merges `patch` into the saved search and refreshes `updatedAt`. `None` when absent.
	///
	/// Flagging a search as default clears the flag on every other search.
	pub fn update(&self, id: Uuid, patch: SavedSearchPatch) -> Result<Option<SavedSearch>> {
		let updated = self.modify(|searches, now| {
			let becomes_default = patch.is_default == Some(true);
			let search = searches.iter_mut().find(|search| search.id == id)?;

			patch.apply(search);

			search.updated_at = now;

			let updated = search.clone();

			if becomes_default {
				clear_default_except(searches, id, now);
			}

			Some(updated)
		})?;

		if updated.is_some() {
			tracing::debug!(saved_search_id = %id, "Saved search updated.");
		}

		Ok(updated)
	}

	/// Returns whether a saved search was removed. Deleting an absent id changes nothing.
	pub fn delete(&self, id: Uuid) -> Result<bool> {
		let removed = self
			.modify(|searches, _| {
				let before = searches.len();

				searches.retain(|search| search.id != id);

				(searches.len() != before).then_some(())
			})?
			.is_some();

		if removed {
			tracing::debug!(saved_search_id = %id, "Saved search deleted.");
		}

		Ok(removed)
	}

	/// Counts one application of the saved search. The only path that changes usage.
	pub fn record_usage(&self, id: Uuid) -> Result<Option<SavedSearch>> {
		let used = self.modify(|searches, now| {
			let search = searches.iter_mut().find(|search| search.id == id)?;

			search.use_count = search.use_count.saturating_add(1);
			search.last_used = Some(search.last_used.map_or(now, |last| last.max(now)));

			Some(search.clone())
		})?;

		if let Some(search) = used.as_ref() {
			tracing::debug!(saved_search_id = %id, use_count = search.use_count, "Saved search used.");
		}

		Ok(used)
	}

	/// Most used first, then most recently used, then by name.
	pub fn most_used(&self, limit: usize) -> Result<Vec<SavedSearch>> {
		let mut searches = self.list()?;

		searches.sort_by(|a, b| match b.use_count.cmp(&a.use_count) {
			Ordering::Equal => match b.last_used.cmp(&a.last_used) {
				Ordering::Equal => a.name.cmp(&b.name),
				other => other,
			},
			other => other,
		});
		searches.truncate(limit);

		Ok(searches)
	}

	pub fn default_search(&self) -> Result<Option<SavedSearch>> {
		Ok(self.list()?.into_iter().find(SavedSearch::is_default))
	}

	/// Flags `id` as the default and clears the flag everywhere else. `None` when absent.
	pub fn set_default(&self, id: Uuid) -> Result<Option<SavedSearch>> {
		let selected = self.modify(|searches, now| {
			let search = searches.iter_mut().find(|search| search.id == id)?;

			if !search.is_default() {
				search.is_default = Some(true);
				search.updated_at = now;
			}

			let selected = search.clone();

			clear_default_except(searches, id, now);

			Some(selected)
		})?;

		if selected.is_some() {
			tracing::debug!(saved_search_id = %id, "Default saved search changed.");
		}

		Ok(selected)
	}

	fn modify<T, F>(&self, apply: F) -> Result<Option<T>>
	where
		F: FnOnce(&mut Vec<SavedSearch>, OffsetDateTime) -> Option<T>,
	{
		let _guard = self.lock();
		// A miss leaves an unseeded store untouched.
		let (mut searches, seeded) = self.load_or_example()?;
		let Some(output) = apply(&mut searches, OffsetDateTime::now_utc()) else {
			return Ok(None);
		};

		self.repo.save(&searches)?;

		if seeded {
			tracing::info!(count = searches.len(), "Seeded example saved searches.");
		}

		Ok(Some(output))
	}

	/// Must be called with `lock` held.
	fn load_or_seed(&self) -> Result<Vec<SavedSearch>> {
		let (searches, seeded) = self.load_or_example()?;

		if seeded {
			self.repo.save(&searches)?;

			tracing::info!(count = searches.len(), "Seeded example saved searches.");
		}

		Ok(searches)
	}

	/// The persisted collection, or the unsaved example set when nothing was ever persisted.
	///
	/// The flag is `true` when the examples were produced and still need saving.
	fn load_or_example(&self) -> Result<(Vec<SavedSearch>, bool)> {
		if let Some(searches) = self.repo.load()? {
			return Ok((searches, false));
		}
		if !self.seed_examples {
			return Ok((Vec::new(), false));
		}

		Ok((seed::example_searches(OffsetDateTime::now_utc()), true))
	}

	fn lock(&self) -> MutexGuard<'_, ()> {
		self.lock.lock().unwrap_or_else(|err| err.into_inner())
	}
}

fn clear_default_except(searches: &mut [SavedSearch], id: Uuid, now: OffsetDateTime) {
	for search in searches.iter_mut().filter(|search| search.id != id && search.is_default()) {
		search.is_default = Some(false);
		search.updated_at = now;
	}
}
