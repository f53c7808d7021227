use std::{marker::PhantomData, sync::Arc};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, kv::KeyValueStore};

/// Loads and saves an entire collection at once.
pub trait Repository<T>
where
	Self: Send + Sync,
{
	/// `None` when nothing has ever been saved under this collection.
	fn load(&self) -> Result<Option<Vec<T>>>;

	fn save(&self, items: &[T]) -> Result<()>;
}

/// A collection serialized as one JSON array under a fixed key.
pub struct JsonCollection<T> {
	store: Arc<dyn KeyValueStore>,
	key: &'static str,
	_items: PhantomData<fn() -> T>,
}
impl<T> JsonCollection<T> {
	pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
		Self { store, key, _items: PhantomData }
	}

	pub fn key(&self) -> &'static str {
		self.key
	}
}

impl<T> Repository<T> for JsonCollection<T>
where
	T: Serialize + DeserializeOwned,
{
	fn load(&self) -> Result<Option<Vec<T>>> {
		let Some(raw) = self.store.read(self.key)? else {
			return Ok(None);
		};

		serde_json::from_str(&raw).map(Some).map_err(|err| {
			tracing::warn!(key = self.key, error = %err, "Failed to decode persisted collection.");

			Error::Decode { key: self.key.to_string(), source: err }
		})
	}

	fn save(&self, items: &[T]) -> Result<()> {
		let raw = serde_json::to_string(items)
			.map_err(|err| Error::Encode { key: self.key.to_string(), source: err })?;

		self.store.write(self.key, &raw)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use crate::{
		Error,
		kv::{KeyValueStore, MemoryStore},
		repository::{JsonCollection, Repository},
	};

	#[test]
	fn absent_and_empty_collections_differ() {
		let collection: JsonCollection<u32> = JsonCollection::new(Arc::new(MemoryStore::new()), "n");

		assert_eq!(collection.load().expect("load"), None);

		collection.save(&[]).expect("save");

		assert_eq!(collection.load().expect("load"), Some(Vec::new()));
	}

	#[test]
	fn corrupt_documents_surface_as_decode_errors() {
		let store = Arc::new(MemoryStore::new());

		store.write("n", "{not json").expect("write");

		let collection: JsonCollection<u32> = JsonCollection::new(store, "n");

		assert!(matches!(collection.load(), Err(Error::Decode { ref key, .. }) if key == "n"));
	}
}
