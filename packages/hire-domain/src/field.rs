use serde::{Deserialize, Serialize};

/// Attributes a query condition may name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
	Name,
	Email,
	Phone,
	Position,
	Location,
	ExperienceLevel,
	Status,
	Source,
	Skills,
	Tags,
	ExperienceYears,
	Rating,
}
impl SearchField {
	pub const ALL: [Self; 12] = [
		Self::Name,
		Self::Email,
		Self::Phone,
		Self::Position,
		Self::Location,
		Self::ExperienceLevel,
		Self::Status,
		Self::Source,
		Self::Skills,
		Self::Tags,
		Self::ExperienceYears,
		Self::Rating,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::Position => "position",
			Self::Location => "location",
			Self::ExperienceLevel => "experienceLevel",
			Self::Status => "status",
			Self::Source => "source",
			Self::Skills => "skills",
			Self::Tags => "tags",
			Self::ExperienceYears => "experienceYears",
			Self::Rating => "rating",
		}
	}

	pub fn kind(self) -> FieldKind {
		match self {
			Self::Name | Self::Email | Self::Phone | Self::Position | Self::Location =>
				FieldKind::Text,
			Self::ExperienceLevel | Self::Status | Self::Source => FieldKind::Keyword,
			Self::Skills | Self::Tags => FieldKind::List,
			Self::ExperienceYears | Self::Rating => FieldKind::Number,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
	/// Free text, lower-cased before comparison.
	Text,
	/// Enumerated value, compared as stored.
	Keyword,
	Number,
	/// String collection, each element lower-cased before comparison.
	List,
}

/// A field name as it appears in a persisted query.
///
/// Names outside [`SearchField`] are kept verbatim so they round-trip, and never match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldKey {
	Known(SearchField),
	Unknown(String),
}
impl FieldKey {
	pub fn known(&self) -> Option<SearchField> {
		match self {
			Self::Known(field) => Some(*field),
			Self::Unknown(_) => None,
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::Known(field) => field.as_str(),
			Self::Unknown(raw) => raw.as_str(),
		}
	}
}

impl From<SearchField> for FieldKey {
	fn from(field: SearchField) -> Self {
		Self::Known(field)
	}
}

/// Raw attribute value handed to the evaluator. Normalization happens at comparison time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
	Text(&'a str),
	Keyword(&'static str),
	Number(f64),
	List(&'a [String]),
	Missing,
}

pub trait SearchRecord {
	fn field_value(&self, field: SearchField) -> FieldValue<'_>;
}
