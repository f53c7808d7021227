pub mod kv;
pub mod models;
pub mod repository;
pub mod time_serde;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const SAVED_SEARCHES_KEY: &str = "saved_searches";
pub const SEARCH_HISTORY_KEY: &str = "search_history";
