pub mod history;
pub mod saved_searches;
pub mod search;
pub mod seed;
pub mod source;

mod error;

pub use error::{Error, Result};
pub use history::SearchHistory;
pub use saved_searches::{SavedSearchPatch, SavedSearchStore};
pub use search::SearchService;
pub use source::{JsonRecordFile, RecordSource};

pub use hire_storage::models::{SavedSearch, SearchHistoryEntry};
