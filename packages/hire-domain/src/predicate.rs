use crate::{
	field::{FieldKind, FieldValue, SearchField, SearchRecord},
	query::{Condition, ConditionValue, Operator},
};

/// Decides one condition against one record.
///
/// Unknown fields, unknown operators, and operands of the wrong shape never match.
pub fn matches<R>(record: &R, condition: &Condition) -> bool
where
	R: SearchRecord + ?Sized,
{
	Predicate::compile(condition).is_some_and(|predicate| predicate.matches(record))
}

/// A condition whose field, operator, and operand have been checked against each other.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
	Text(TextCondition),
	Numeric(NumericCondition),
	List(ListCondition),
}
impl Predicate {
	/// Returns `None` when the condition can never match.
	pub fn compile(condition: &Condition) -> Option<Self> {
		let field = condition.field.known()?;
		let operator = condition.operator.known()?;

		match (operator, &condition.value) {
			(Operator::In | Operator::NotIn, ConditionValue::List(values)) =>
				Some(Self::List(ListCondition {
					field,
					negated: operator == Operator::NotIn,
					values: values.iter().map(|value| value.to_lowercase()).collect(),
				})),
			(Operator::GreaterThan | Operator::LessThan, ConditionValue::Number(value))
				if field.kind() == FieldKind::Number =>
			{
				let op = if operator == Operator::GreaterThan {
					NumericOp::GreaterThan
				} else {
					NumericOp::LessThan
				};

				Some(Self::Numeric(NumericCondition { field, op, value: value.as_f64()? }))
			},
			(Operator::Equals | Operator::NotEquals, ConditionValue::Number(value)) => {
				let op = if operator == Operator::Equals {
					NumericOp::Equals
				} else {
					NumericOp::NotEquals
				};

				Some(Self::Numeric(NumericCondition { field, op, value: value.as_f64()? }))
			},
			(_, ConditionValue::Text(needle)) => {
				let op = match operator {
					Operator::Contains => TextOp::Contains,
					Operator::Equals => TextOp::Equals,
					Operator::NotEquals => TextOp::NotEquals,
					Operator::StartsWith => TextOp::StartsWith,
					Operator::EndsWith => TextOp::EndsWith,
					Operator::GreaterThan | Operator::LessThan | Operator::In | Operator::NotIn =>
						return None,
				};

				Some(Self::Text(TextCondition { field, op, needle: needle.to_lowercase() }))
			},
			_ => None,
		}
	}

	pub fn field(&self) -> SearchField {
		match self {
			Self::Text(condition) => condition.field,
			Self::Numeric(condition) => condition.field,
			Self::List(condition) => condition.field,
		}
	}

	pub fn matches<R>(&self, record: &R) -> bool
	where
		R: SearchRecord + ?Sized,
	{
		let value = record.field_value(self.field());

		match self {
			Self::Text(condition) => condition.evaluate(value),
			Self::Numeric(condition) => condition.evaluate(value),
			Self::List(condition) => condition.evaluate(value),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextOp {
	Contains,
	Equals,
	NotEquals,
	StartsWith,
	EndsWith,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextCondition {
	pub field: SearchField,
	pub op: TextOp,
	/// Lower-cased operand.
	pub needle: String,
}
impl TextCondition {
	fn evaluate(&self, value: FieldValue<'_>) -> bool {
		match self.op {
			TextOp::Contains => match value {
				FieldValue::Text(text) => text.to_lowercase().contains(&self.needle),
				FieldValue::Keyword(keyword) => keyword.contains(&self.needle),
				FieldValue::List(items) =>
					items.iter().any(|item| item.to_lowercase().contains(&self.needle)),
				FieldValue::Number(_) | FieldValue::Missing => false,
			},
			TextOp::Equals => self.equals(value),
			TextOp::NotEquals => !self.equals(value),
			TextOp::StartsWith => match value {
				FieldValue::Text(text) => text.to_lowercase().starts_with(&self.needle),
				FieldValue::Keyword(keyword) => keyword.starts_with(&self.needle),
				_ => false,
			},
			TextOp::EndsWith => match value {
				FieldValue::Text(text) => text.to_lowercase().ends_with(&self.needle),
				FieldValue::Keyword(keyword) => keyword.ends_with(&self.needle),
				_ => false,
			},
		}
	}

	fn equals(&self, value: FieldValue<'_>) -> bool {
		match value {
			FieldValue::Text(text) => text.to_lowercase() == self.needle,
			FieldValue::Keyword(keyword) => keyword == self.needle,
			FieldValue::List(items) => items.iter().any(|item| item.to_lowercase() == self.needle),
			FieldValue::Number(_) | FieldValue::Missing => false,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericOp {
	GreaterThan,
	LessThan,
	Equals,
	NotEquals,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumericCondition {
	pub field: SearchField,
	pub op: NumericOp,
	pub value: f64,
}
impl NumericCondition {
	fn evaluate(&self, value: FieldValue<'_>) -> bool {
		let number = match value {
			FieldValue::Number(number) => Some(number),
			_ => None,
		};

		match self.op {
			NumericOp::GreaterThan => number.is_some_and(|number| number > self.value),
			NumericOp::LessThan => number.is_some_and(|number| number < self.value),
			NumericOp::Equals => number.is_some_and(|number| number == self.value),
			NumericOp::NotEquals => !number.is_some_and(|number| number == self.value),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListCondition {
	pub field: SearchField,
	/// `not_in` rather than `in`.
	pub negated: bool,
	/// Lower-cased operands.
	pub values: Vec<String>,
}
impl ListCondition {
	fn evaluate(&self, value: FieldValue<'_>) -> bool {
		let member = match value {
			FieldValue::Text(text) => self.contains(&text.to_lowercase()),
			FieldValue::Keyword(keyword) => self.contains(keyword),
			FieldValue::List(items) => items.iter().any(|item| self.contains(&item.to_lowercase())),
			FieldValue::Number(_) | FieldValue::Missing => false,
		};

		member != self.negated
	}

	fn contains(&self, value: &str) -> bool {
		self.values.iter().any(|candidate| candidate == value)
	}
}
