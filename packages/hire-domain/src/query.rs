use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::field::{FieldKey, SearchField};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
	#[default]
	And,
	Or,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
	Contains,
	Equals,
	NotEquals,
	StartsWith,
	EndsWith,
	GreaterThan,
	LessThan,
	In,
	NotIn,
}
impl Operator {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Contains => "contains",
			Self::Equals => "equals",
			Self::NotEquals => "not_equals",
			Self::StartsWith => "starts_with",
			Self::EndsWith => "ends_with",
			Self::GreaterThan => "greater_than",
			Self::LessThan => "less_than",
			Self::In => "in",
			Self::NotIn => "not_in",
		}
	}
}

/// An operator name as it appears in a persisted query; unrecognized names never match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperatorKey {
	Known(Operator),
	Unknown(String),
}
impl OperatorKey {
	pub fn known(&self) -> Option<Operator> {
		match self {
			Self::Known(operator) => Some(*operator),
			Self::Unknown(_) => None,
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::Known(operator) => operator.as_str(),
			Self::Unknown(raw) => raw.as_str(),
		}
	}
}

impl From<Operator> for OperatorKey {
	fn from(operator: Operator) -> Self {
		Self::Known(operator)
	}
}

/// Condition operand. `Other` keeps any JSON shape the evaluator does not understand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
	Text(String),
	Number(Number),
	List(Vec<String>),
	Other(Value),
}
impl ConditionValue {
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Text(_) => "string",
			Self::Number(_) => "number",
			Self::List(_) => "list",
			Self::Other(_) => "unsupported",
		}
	}
}

impl From<&str> for ConditionValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for ConditionValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<i32> for ConditionValue {
	fn from(value: i32) -> Self {
		Self::Number(value.into())
	}
}

impl From<i64> for ConditionValue {
	fn from(value: i64) -> Self {
		Self::Number(value.into())
	}
}

impl From<f64> for ConditionValue {
	fn from(value: f64) -> Self {
		Number::from_f64(value).map_or(Self::Other(Value::Null), Self::Number)
	}
}

impl From<Vec<String>> for ConditionValue {
	fn from(values: Vec<String>) -> Self {
		Self::List(values)
	}
}

impl<const N: usize> From<[&str; N]> for ConditionValue {
	fn from(values: [&str; N]) -> Self {
		Self::List(values.iter().map(|value| value.to_string()).collect())
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
	pub id: String,
	pub field: FieldKey,
	pub operator: OperatorKey,
	pub value: ConditionValue,
	/// Shown between conditions by query builders. Evaluation only reads the group operator.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub logical_operator: Option<LogicalOperator>,
}
impl Condition {
	pub fn new(
		id: impl Into<String>,
		field: SearchField,
		operator: Operator,
		value: impl Into<ConditionValue>,
	) -> Self {
		Self {
			id: id.into(),
			field: field.into(),
			operator: operator.into(),
			value: value.into(),
			logical_operator: None,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
	pub id: String,
	pub conditions: Vec<Condition>,
	pub logical_operator: LogicalOperator,
}
impl Group {
	/// Builds a group and stamps the group operator onto every condition after the first,
	/// which is how query builders display it.
	pub fn new(
		id: impl Into<String>,
		logical_operator: LogicalOperator,
		conditions: Vec<Condition>,
	) -> Self {
		let conditions = conditions
			.into_iter()
			.enumerate()
			.map(|(index, condition)| Condition {
				logical_operator: (index > 0).then_some(logical_operator),
				..condition
			})
			.collect();

		Self { id: id.into(), conditions, logical_operator }
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
	pub groups: Vec<Group>,
	pub global_operator: LogicalOperator,
}
impl Query {
	pub fn new(global_operator: LogicalOperator, groups: Vec<Group>) -> Self {
		Self { groups, global_operator }
	}

	pub fn condition_count(&self) -> usize {
		self.groups.iter().map(|group| group.conditions.len()).sum()
	}
}
