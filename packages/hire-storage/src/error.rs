use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("I/O error at {path:?}.")]
	Io { path: PathBuf, source: std::io::Error },
	#[error("Failed to decode collection '{key}'.")]
	Decode { key: String, source: serde_json::Error },
	#[error("Failed to encode collection '{key}'.")]
	Encode { key: String, source: serde_json::Error },
	#[error("Invalid storage key: {0}")]
	InvalidKey(String),
}
