pub mod candidate;
pub mod evaluator;
pub mod field;
pub mod predicate;
pub mod query;
pub mod validate;

pub use candidate::{Candidate, CandidateSource, CandidateStatus, ExperienceLevel};
pub use evaluator::{CompiledQuery, filter, match_group, match_query};
pub use field::{FieldKey, FieldKind, FieldValue, SearchField, SearchRecord};
pub use predicate::{
	ListCondition, NumericCondition, NumericOp, Predicate, TextCondition, TextOp, matches,
};
pub use query::{
	Condition, ConditionValue, Group, LogicalOperator, Operator, OperatorKey, Query,
};
pub use validate::{MAX_SEARCH_NAME_CHARS, ValidationError, inspect_query, validate_search_name};
