use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Cannot read search config {}.", path.display())]
	ReadConfig { path: PathBuf, source: std::io::Error },
	#[error("Search config {} is not valid TOML.", path.display())]
	ParseConfig { path: PathBuf, source: toml::de::Error },
	/// Raised by [`crate::parse`], which has no file to name.
	#[error("Search config is not valid TOML.")]
	InvalidToml { source: toml::de::Error },
	/// `key` is the dotted TOML path of the offending setting.
	#[error("{key}: {message}")]
	Validation { key: &'static str, message: String },
}
impl Error {
	pub(crate) fn invalid(key: &'static str, message: &str) -> Self {
		Self::Validation { key, message: message.to_string() }
	}
}

