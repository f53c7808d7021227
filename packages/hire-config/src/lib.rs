mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, History, STORAGE_BACKEND_FILE, STORAGE_BACKEND_MEMORY, SavedSearches, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::InvalidToml { source } => Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config =
		toml::from_str(raw).map_err(|err| Error::InvalidToml { source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::invalid("service.log_level", "must be non-empty."));
	}

	match cfg.storage.backend.as_str() {
		STORAGE_BACKEND_FILE if cfg.storage.data_dir.is_none() =>
			return Err(Error::invalid("storage.data_dir", "is required for the file backend.")),
		STORAGE_BACKEND_FILE | STORAGE_BACKEND_MEMORY => {},
		_ => return Err(Error::invalid("storage.backend", "must be one of file or memory.")),
	}

	if cfg.history.retention == 0 {
		return Err(Error::invalid("history.retention", "must be greater than zero."));
	}
	if cfg.history.display_limit == 0 {
		return Err(Error::invalid("history.display_limit", "must be greater than zero."));
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.storage.backend = cfg.storage.backend.trim().to_ascii_lowercase();

	if cfg
		.storage
		.data_dir
		.as_deref()
		.and_then(Path::to_str)
		.map(|dir| dir.trim().is_empty())
		.unwrap_or(false)
	{
		cfg.storage.data_dir = None;
	}
}
