mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use uuid::Uuid;

use hire_domain::{Candidate, CandidateSource, CandidateStatus, ExperienceLevel};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = r#"[service]
log_level = "info"

[storage]
backend  = "file"
data_dir = "{data_dir}"

[saved_searches]
seed_examples = {seed_examples}

[history]
retention     = 50
display_limit = 20
"#;

/// A unique directory under the system temp dir, removed on drop.
pub struct TestDataDir {
	path: PathBuf,
	cleaned: bool,
}
impl TestDataDir {
	pub fn new() -> Result<Self> {
		let path = env::temp_dir().join(format!("hire_test_{}", Uuid::new_v4().simple()));

		fs::create_dir_all(&path).map_err(|err| {
			Error::Message(format!("Failed to create test data dir {path:?}: {err}."))
		})?;

		Ok(Self { path, cleaned: false })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Writes `contents` to `name` inside the directory and returns the full path.
	pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
		let path = self.path.join(name);

		fs::write(&path, contents)?;

		Ok(path)
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleaned = true;

		fs::remove_dir_all(&self.path)?;

		Ok(())
	}
}

impl Drop for TestDataDir {
	fn drop(&mut self) {
		if self.cleaned {
			return;
		}

		let _ = fs::remove_dir_all(&self.path);
	}
}

/// Renders a file-backed sample config pointing at `data_dir`.
pub fn sample_config_toml(data_dir: &Path, seed_examples: bool) -> String {
	SAMPLE_CONFIG_TEMPLATE_TOML
		.replace("{data_dir}", &data_dir.display().to_string().replace('\\', "/"))
		.replace("{seed_examples}", if seed_examples { "true" } else { "false" })
}

/// A mid-level, direct-sourced, new candidate with no skills.
pub fn candidate(id: &str, name: &str) -> Candidate {
	Candidate {
		id: id.to_string(),
		name: name.to_string(),
		email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
		phone: String::new(),
		position: String::new(),
		location: String::new(),
		experience_level: ExperienceLevel::Mid,
		status: CandidateStatus::New,
		source: CandidateSource::Direct,
		skills: Vec::new(),
		tags: Vec::new(),
		experience_years: 0.0,
		rating: None,
	}
}

/// A small, varied pool of candidates for query tests.
pub fn candidate_pool() -> Vec<Candidate> {
	vec![
		Candidate {
			position: "Senior Frontend Engineer".to_string(),
			location: "Berlin".to_string(),
			experience_level: ExperienceLevel::Senior,
			status: CandidateStatus::Active,
			source: CandidateSource::Referral,
			skills: vec!["React".to_string(), "TypeScript".to_string()],
			tags: vec!["remote".to_string()],
			experience_years: 8.0,
			rating: Some(4.5),
			..candidate("c-1", "Alice Moreau")
		},
		Candidate {
			position: "Backend Developer".to_string(),
			location: "Lisbon".to_string(),
			experience_level: ExperienceLevel::Mid,
			status: CandidateStatus::Inactive,
			source: CandidateSource::Linkedin,
			skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
			tags: vec!["relocation".to_string()],
			experience_years: 4.0,
			rating: Some(3.8),
			..candidate("c-2", "Bruno Costa")
		},
		Candidate {
			position: "Engineering Manager".to_string(),
			location: "Remote".to_string(),
			experience_level: ExperienceLevel::Executive,
			status: CandidateStatus::Interviewing,
			source: CandidateSource::Agency,
			skills: vec!["Leadership".to_string(), "Vue".to_string()],
			tags: vec!["remote".to_string(), "priority".to_string()],
			experience_years: 15.0,
			rating: None,
			..candidate("c-3", "Chen Wei")
		},
		Candidate {
			position: "Junior QA Analyst".to_string(),
			location: "Berlin".to_string(),
			experience_level: ExperienceLevel::Junior,
			status: CandidateStatus::New,
			source: CandidateSource::JobBoard,
			skills: vec!["Selenium".to_string()],
			tags: Vec::new(),
			experience_years: 1.0,
			rating: Some(3.0),
			..candidate("c-4", "Dana Okafor")
		},
	]
}
