use serde::{Deserialize, Serialize};

use crate::field::{FieldValue, SearchField, SearchRecord};

type Extractor = for<'a> fn(&'a Candidate) -> FieldValue<'a>;

/// Adding a searchable attribute means adding a [`SearchField`] variant and one row here.
const CANDIDATE_FIELDS: [(SearchField, Extractor); 12] = [
	(SearchField::Name, |candidate| FieldValue::Text(&candidate.name)),
	(SearchField::Email, |candidate| FieldValue::Text(&candidate.email)),
	(SearchField::Phone, |candidate| FieldValue::Text(&candidate.phone)),
	(SearchField::Position, |candidate| FieldValue::Text(&candidate.position)),
	(SearchField::Location, |candidate| FieldValue::Text(&candidate.location)),
	(SearchField::ExperienceLevel, |candidate| {
		FieldValue::Keyword(candidate.experience_level.as_str())
	}),
	(SearchField::Status, |candidate| FieldValue::Keyword(candidate.status.as_str())),
	(SearchField::Source, |candidate| FieldValue::Keyword(candidate.source.as_str())),
	(SearchField::Skills, |candidate| FieldValue::List(&candidate.skills)),
	(SearchField::Tags, |candidate| FieldValue::List(&candidate.tags)),
	(SearchField::ExperienceYears, |candidate| FieldValue::Number(candidate.experience_years)),
	(SearchField::Rating, |candidate| {
		candidate.rating.map_or(FieldValue::Missing, FieldValue::Number)
	}),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub phone: String,
	#[serde(default)]
	pub position: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub experience_level: ExperienceLevel,
	#[serde(default)]
	pub status: CandidateStatus,
	#[serde(default)]
	pub source: CandidateSource,
	#[serde(default)]
	pub skills: Vec<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub experience_years: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rating: Option<f64>,
}

impl SearchRecord for Candidate {
	fn field_value(&self, field: SearchField) -> FieldValue<'_> {
		CANDIDATE_FIELDS
			.iter()
			.find(|(candidate_field, _)| *candidate_field == field)
			.map_or(FieldValue::Missing, |(_, extract)| extract(self))
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
	Entry,
	Junior,
	#[default]
	Mid,
	Senior,
	Lead,
	Executive,
}
impl ExperienceLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Entry => "entry",
			Self::Junior => "junior",
			Self::Mid => "mid",
			Self::Senior => "senior",
			Self::Lead => "lead",
			Self::Executive => "executive",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
	#[default]
	New,
	Screening,
	Interviewing,
	Offered,
	Hired,
	Rejected,
	Active,
	Inactive,
	Withdrawn,
}
impl CandidateStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::New => "new",
			Self::Screening => "screening",
			Self::Interviewing => "interviewing",
			Self::Offered => "offered",
			Self::Hired => "hired",
			Self::Rejected => "rejected",
			Self::Active => "active",
			Self::Inactive => "inactive",
			Self::Withdrawn => "withdrawn",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
	Referral,
	Linkedin,
	JobBoard,
	Website,
	Agency,
	#[default]
	Direct,
	Other,
}
impl CandidateSource {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Referral => "referral",
			Self::Linkedin => "linkedin",
			Self::JobBoard => "job_board",
			Self::Website => "website",
			Self::Agency => "agency",
			Self::Direct => "direct",
			Self::Other => "other",
		}
	}
}
