use std::fmt::{Display, Formatter};

use crate::{
	field::{FieldKind, SearchField},
	predicate::Predicate,
	query::{Condition, ConditionValue, Operator, Query},
};

pub const MAX_SEARCH_NAME_CHARS: usize = 120;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
	pub path: String,
	pub message: String,
}
impl Display for ValidationError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.path, self.message)
	}
}

impl std::error::Error for ValidationError {}

/// Returns the trimmed name a saved search may be stored under.
pub fn validate_search_name(name: &str) -> Result<String, ValidationError> {
	let name = name.trim();

	if name.is_empty() {
		return Err(ValidationError {
			path: "$.name".to_string(),
			message: "name must be non-empty.".to_string(),
		});
	}

	let chars = name.chars().count();

	if chars > MAX_SEARCH_NAME_CHARS {
		return Err(ValidationError {
			path: "$.name".to_string(),
			message: format!("name exceeds maximum length ({chars}/{MAX_SEARCH_NAME_CHARS})."),
		});
	}

	Ok(name.to_string())
}

/// Lists every condition that can never match, so a caller can explain an empty result.
///
/// Evaluation does not depend on this; malformed conditions simply evaluate to `false`.
pub fn inspect_query(query: &Query) -> Vec<ValidationError> {
	let mut issues = Vec::new();

	for (group_index, group) in query.groups.iter().enumerate() {
		for (condition_index, condition) in group.conditions.iter().enumerate() {
			let path = format!("$.groups[{group_index}].conditions[{condition_index}]");

			if let Some(issue) = inspect_condition(condition, &path) {
				issues.push(issue);
			}
		}
	}

	issues
}

fn inspect_condition(condition: &Condition, path: &str) -> Option<ValidationError> {
	let Some(field) = condition.field.known() else {
		let allowlist =
			SearchField::ALL.iter().map(|field| field.as_str()).collect::<Vec<_>>().join(", ");

		return Some(ValidationError {
			path: format!("{path}.field"),
			message: format!(
				"field '{}' is not in allowlist: {allowlist}.",
				condition.field.as_str()
			),
		});
	};
	let Some(operator) = condition.operator.known() else {
		return Some(ValidationError {
			path: format!("{path}.operator"),
			message: format!("unsupported operator '{}'.", condition.operator.as_str()),
		});
	};

	if Predicate::compile(condition).is_some() {
		return None;
	}

	let message = match operator {
		Operator::In | Operator::NotIn =>
			format!("{} requires a list of strings.", operator.as_str()),
		Operator::GreaterThan | Operator::LessThan if field.kind() != FieldKind::Number => format!(
			"{} requires a numeric field, '{}' is not numeric.",
			operator.as_str(),
			field.as_str()
		),
		Operator::GreaterThan | Operator::LessThan =>
			format!("{} requires a numeric value.", operator.as_str()),
		Operator::Equals | Operator::NotEquals =>
			format!("{} requires a string or numeric value.", operator.as_str()),
		Operator::Contains | Operator::StartsWith | Operator::EndsWith =>
			format!("{} requires a string value.", operator.as_str()),
	};

	Some(ValidationError {
		path: format!("{path}.value"),
		message: format!("{message} Got {}.", describe(&condition.value)),
	})
}

fn describe(value: &ConditionValue) -> &'static str {
	match value {
		ConditionValue::Number(number) if number.as_f64().is_none() => "an unrepresentable number",
		ConditionValue::Text(_) => "a string",
		ConditionValue::Number(_) => "a number",
		ConditionValue::List(_) => "a list",
		ConditionValue::Other(_) => "an unsupported value",
	}
}
