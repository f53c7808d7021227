use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use hire_domain::{Group, LogicalOperator, Query};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
	pub id: Uuid,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub groups: Vec<Group>,
	pub global_operator: LogicalOperator,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_default: Option<bool>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
	#[serde(default, with = "crate::time_serde::option", skip_serializing_if = "Option::is_none")]
	pub last_used: Option<OffsetDateTime>,
	#[serde(default)]
	pub use_count: u64,
}
impl SavedSearch {
	pub fn query(&self) -> Query {
		Query::new(self.global_operator, self.groups.clone())
	}

	pub fn is_default(&self) -> bool {
		self.is_default.unwrap_or(false)
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
	pub id: Uuid,
	pub search_query: String,
	pub filters: Query,
	#[serde(with = "crate::time_serde")]
	pub timestamp: OffsetDateTime,
	pub result_count: usize,
}
