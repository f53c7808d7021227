use std::{
	collections::HashMap,
	fs, io,
	path::{Path, PathBuf},
	sync::Mutex,
};

use crate::{Error, Result};

/// Whole-document key-value persistence. Each key holds one serialized collection.
pub trait KeyValueStore
where
	Self: Send + Sync,
{
	fn read(&self, key: &str) -> Result<Option<String>>;

	fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<data_dir>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
	data_dir: PathBuf,
}
impl FileStore {
	pub fn open(data_dir: &Path) -> Result<Self> {
		fs::create_dir_all(data_dir)
			.map_err(|err| Error::Io { path: data_dir.to_path_buf(), source: err })?;

		Ok(Self { data_dir: data_dir.to_path_buf() })
	}

	pub fn data_dir(&self) -> &Path {
		&self.data_dir
	}

	fn path_for(&self, key: &str) -> Result<PathBuf> {
		validate_key(key)?;

		Ok(self.data_dir.join(format!("{key}.json")))
	}
}

impl KeyValueStore for FileStore {
	fn read(&self, key: &str) -> Result<Option<String>> {
		let path = self.path_for(key)?;

		match fs::read_to_string(&path) {
			Ok(raw) => Ok(Some(raw)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(err) => Err(Error::Io { path, source: err }),
		}
	}

	fn write(&self, key: &str, value: &str) -> Result<()> {
		let path = self.path_for(key)?;
		let staging = self.data_dir.join(format!(".{key}.json.tmp"));

		// Readers see either the previous document or the new one, never a partial write.
		fs::write(&staging, value).map_err(|err| Error::Io { path: staging.clone(), source: err })?;
		fs::rename(&staging, &path).map_err(|err| Error::Io { path: path.clone(), source: err })?;

		tracing::debug!(key, bytes = value.len(), "Collection written.");

		Ok(())
	}
}

#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: Mutex<HashMap<String, String>>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryStore {
	fn read(&self, key: &str) -> Result<Option<String>> {
		validate_key(key)?;

		let entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		Ok(entries.get(key).cloned())
	}

	fn write(&self, key: &str, value: &str) -> Result<()> {
		validate_key(key)?;

		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.insert(key.to_string(), value.to_string());

		Ok(())
	}
}

fn validate_key(key: &str) -> Result<()> {
	if key.is_empty()
		|| !key.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
	{
		return Err(Error::InvalidKey(key.to_string()));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::{
		Error,
		kv::{KeyValueStore, MemoryStore, validate_key},
	};

	#[test]
	fn keys_are_restricted_to_snake_case() {
		assert!(validate_key("saved_searches").is_ok());
		assert!(validate_key("history2").is_ok());

		for key in ["", "../etc", "Saved", "a.b", "a-b"] {
			assert!(matches!(validate_key(key), Err(Error::InvalidKey(_))), "{key}");
		}
	}

	#[test]
	fn memory_store_reads_back_writes() {
		let store = MemoryStore::new();

		assert_eq!(store.read("k").expect("read"), None);

		store.write("k", "[1]").expect("write");
		store.write("k", "[2]").expect("write");

		assert_eq!(store.read("k").expect("read").as_deref(), Some("[2]"));
	}
}
