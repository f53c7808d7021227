use crate::{
	field::SearchRecord,
	predicate::{Predicate, matches},
	query::{Group, LogicalOperator},
};

/// Decides a group. An empty group matches every record.
pub fn match_group<R>(record: &R, group: &Group) -> bool
where
	R: SearchRecord + ?Sized,
{
	combine(group.logical_operator, group.conditions.iter(), |condition| matches(record, condition))
}

/// Decides a whole query. An empty group list matches every record.
pub fn match_query<R>(record: &R, groups: &[Group], global_operator: LogicalOperator) -> bool
where
	R: SearchRecord + ?Sized,
{
	combine(global_operator, groups.iter(), |group| match_group(record, group))
}

/// Returns the records matching the query, in input order.
pub fn filter<R>(records: &[R], groups: &[Group], global_operator: LogicalOperator) -> Vec<R>
where
	R: SearchRecord + Clone,
{
	CompiledQuery::new(groups, global_operator).filter(records)
}

/// A query whose conditions have been compiled once, for evaluation over many records.
///
/// Conditions that fail to compile are kept as `None` so they still count as a `false`
/// operand of their group.
#[derive(Clone, Debug)]
pub struct CompiledQuery {
	groups: Vec<CompiledGroup>,
	global_operator: LogicalOperator,
}
impl CompiledQuery {
	pub fn new(groups: &[Group], global_operator: LogicalOperator) -> Self {
		let groups = groups
			.iter()
			.map(|group| CompiledGroup {
				predicates: group.conditions.iter().map(Predicate::compile).collect(),
				logical_operator: group.logical_operator,
			})
			.collect();

		Self { groups, global_operator }
	}

	pub fn matches<R>(&self, record: &R) -> bool
	where
		R: SearchRecord + ?Sized,
	{
		combine(self.global_operator, self.groups.iter(), |group| group.matches(record))
	}

	pub fn filter<R>(&self, records: &[R]) -> Vec<R>
	where
		R: SearchRecord + Clone,
	{
		records.iter().filter(|record| self.matches(*record)).cloned().collect()
	}
}

#[derive(Clone, Debug)]
struct CompiledGroup {
	predicates: Vec<Option<Predicate>>,
	logical_operator: LogicalOperator,
}
impl CompiledGroup {
	fn matches<R>(&self, record: &R) -> bool
	where
		R: SearchRecord + ?Sized,
	{
		combine(self.logical_operator, self.predicates.iter(), |predicate| {
			predicate.as_ref().is_some_and(|predicate| predicate.matches(record))
		})
	}
}

fn combine<I, F>(operator: LogicalOperator, mut operands: I, eval: F) -> bool
where
	I: ExactSizeIterator,
	F: FnMut(I::Item) -> bool,
{
	if operands.len() == 0 {
		return true;
	}

	match operator {
		LogicalOperator::And => operands.all(eval),
		LogicalOperator::Or => operands.any(eval),
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use crate::{
		evaluator::{CompiledQuery, combine, match_group, match_query},
		field::{FieldValue, SearchField, SearchRecord},
		query::{Condition, Group, LogicalOperator, Operator},
	};

	struct Status(&'static str);
	impl SearchRecord for Status {
		fn field_value(&self, field: SearchField) -> FieldValue<'_> {
			match field {
				SearchField::Status => FieldValue::Keyword(self.0),
				_ => FieldValue::Missing,
			}
		}
	}

	fn status_is(id: &str, value: &str) -> Condition {
		Condition::new(id, SearchField::Status, Operator::Equals, value)
	}

	#[test]
	fn empty_group_and_empty_query_match_everything() {
		let record = Status("inactive");
		let empty = Group::new("g1", LogicalOperator::Or, Vec::new());

		assert!(match_group(&record, &empty));
		assert!(match_query(&record, &[], LogicalOperator::And));
		assert!(match_query(&record, &[], LogicalOperator::Or));
	}

	#[test]
	fn group_operator_governs_every_condition() {
		let record = Status("active");
		let mut conditions = vec![status_is("c1", "active"), status_is("c2", "hired")];

		// A per-condition OR must not turn an AND group into a disjunction.
		conditions[1].logical_operator = Some(LogicalOperator::Or);

		let and_group =
			Group { id: "g1".to_string(), conditions, logical_operator: LogicalOperator::And };
		let or_group = Group { logical_operator: LogicalOperator::Or, ..and_group.clone() };

		assert!(!match_group(&record, &and_group));
		assert!(match_group(&record, &or_group));
	}

	#[test]
	fn combine_short_circuits() {
		let calls = Cell::new(0);
		let eval = |value: &bool| {
			calls.set(calls.get() + 1);

			*value
		};

		assert!(!combine(LogicalOperator::And, [true, false, true].iter(), eval));
		assert_eq!(calls.get(), 2);

		calls.set(0);

		assert!(combine(LogicalOperator::Or, [false, true, false].iter(), eval));
		assert_eq!(calls.get(), 2);
	}

	#[test]
	fn compiled_query_agrees_with_direct_evaluation() {
		let groups = vec![
			Group::new("g1", LogicalOperator::And, vec![status_is("c1", "ACTIVE")]),
			Group::new("g2", LogicalOperator::Or, vec![
				status_is("c2", "hired"),
				Condition::new("c3", SearchField::Status, Operator::GreaterThan, 1),
			]),
		];

		for operator in [LogicalOperator::And, LogicalOperator::Or] {
			let compiled = CompiledQuery::new(&groups, operator);

			for status in ["active", "hired", "new"] {
				let record = Status(status);

				assert_eq!(
					compiled.matches(&record),
					match_query(&record, &groups, operator),
					"{status} under {operator:?}"
				);
			}
		}
	}
}
