use time::OffsetDateTime;
use uuid::Uuid;

use hire_domain::{Condition, Group, LogicalOperator, Operator, SearchField};
use hire_storage::models::SavedSearch;

const SEED_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2b7e_4d0a_4c5e_9b3f_8a21_d7e4_c915);

/// Starter searches written the first time the saved search collection is read.
pub fn example_searches(now: OffsetDateTime) -> Vec<SavedSearch> {
	vec![
		example(
			"senior-react-developers",
			"Senior React Developers",
			"Senior or lead candidates listing React.",
			LogicalOperator::And,
			vec![Group::new("seed-g1", LogicalOperator::And, vec![
				Condition::new("seed-c1", SearchField::Skills, Operator::Contains, "react"),
				Condition::new(
					"seed-c2",
					SearchField::ExperienceLevel,
					Operator::In,
					["senior", "lead"],
				),
			])],
			now,
		),
		example(
			"active-remote-candidates",
			"Active Remote Candidates",
			"Active candidates who are remote by location or tag.",
			LogicalOperator::And,
			vec![
				Group::new("seed-g1", LogicalOperator::And, vec![Condition::new(
					"seed-c1",
					SearchField::Status,
					Operator::Equals,
					"active",
				)]),
				Group::new("seed-g2", LogicalOperator::Or, vec![
					Condition::new("seed-c2", SearchField::Location, Operator::Contains, "remote"),
					Condition::new("seed-c3", SearchField::Tags, Operator::In, ["remote"]),
				]),
			],
			now,
		),
		example(
			"referred-or-top-rated",
			"Referred or Top Rated",
			"Referrals, or anyone rated above 4.",
			LogicalOperator::Or,
			vec![
				Group::new("seed-g1", LogicalOperator::And, vec![Condition::new(
					"seed-c1",
					SearchField::Source,
					Operator::Equals,
					"referral",
				)]),
				Group::new("seed-g2", LogicalOperator::And, vec![Condition::new(
					"seed-c2",
					SearchField::Rating,
					Operator::GreaterThan,
					4,
				)]),
			],
			now,
		),
	]
}

fn example(
	slug: &str,
	name: &str,
	description: &str,
	global_operator: LogicalOperator,
	groups: Vec<Group>,
	now: OffsetDateTime,
) -> SavedSearch {
	SavedSearch {
		id: Uuid::new_v5(&SEED_NAMESPACE, slug.as_bytes()),
		name: name.to_string(),
		description: Some(description.to_string()),
		groups,
		global_operator,
		is_default: None,
		created_at: now,
		updated_at: now,
		last_used: None,
		use_count: 0,
	}
}
