use std::{
	fs,
	path::{Path, PathBuf},
};

use crate::{Error, Result};
use hire_domain::Candidate;

/// Read side of the candidate store. The engine only ever asks for the full list.
pub trait RecordSource {
	fn records(&self) -> Result<Vec<Candidate>>;
}

impl RecordSource for Vec<Candidate> {
	fn records(&self) -> Result<Vec<Candidate>> {
		Ok(self.clone())
	}
}

/// A JSON array of candidates on disk.
#[derive(Debug, Clone)]
pub struct JsonRecordFile {
	path: PathBuf,
}
impl JsonRecordFile {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self { path: path.as_ref().to_path_buf() }
	}
}

impl RecordSource for JsonRecordFile {
	fn records(&self) -> Result<Vec<Candidate>> {
		let raw = fs::read_to_string(&self.path).map_err(|err| Error::Source {
			message: format!("failed to read {:?}: {err}", self.path),
		})?;

		serde_json::from_str(&raw).map_err(|err| Error::Source {
			message: format!("failed to parse candidates in {:?}: {err}", self.path),
		})
	}
}
