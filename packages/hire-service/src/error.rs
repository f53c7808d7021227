use std::fmt::Write as _;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Record source error: {message}")]
	Source { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<hire_storage::Error> for Error {
	fn from(err: hire_storage::Error) -> Self {
		match err {
			hire_storage::Error::InvalidKey(key) =>
				Self::InvalidRequest { message: format!("invalid storage key '{key}'.") },
			other => Self::Storage { message: error_chain(&other) },
		}
	}
}

impl From<hire_domain::ValidationError> for Error {
	fn from(err: hire_domain::ValidationError) -> Self {
		Self::InvalidRequest { message: err.to_string() }
	}
}

fn error_chain(err: &dyn std::error::Error) -> String {
	let mut message = err.to_string();
	let mut source = err.source();

	while let Some(inner) = source {
		let _ = write!(message, " {inner}");

		source = inner.source();
	}

	message
}
