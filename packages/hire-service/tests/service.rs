use std::sync::Arc;

use uuid::Uuid;

use hire_config::Config;
use hire_domain::{
	Candidate, Condition, FieldKey, Group, LogicalOperator, Operator, Query, SearchField,
};
use hire_service::{Error, JsonRecordFile, RecordSource, SearchService};
use hire_storage::{
	SAVED_SEARCHES_KEY,
	kv::{KeyValueStore, MemoryStore},
};
use hire_testkit::TestDataDir;

const MEMORY_CONFIG: &str = r#"
[service]
log_level = "info"

[storage]
backend = "memory"
"#;

fn memory_config() -> Config {
	hire_config::parse(MEMORY_CONFIG).expect("valid config")
}

fn memory_service() -> SearchService {
	SearchService::with_store(Arc::new(MemoryStore::new()), &memory_config())
}

fn ids(records: &[Candidate]) -> Vec<&str> {
	records.iter().map(|record| record.id.as_str()).collect()
}

fn react_query() -> Query {
	Query::new(LogicalOperator::And, vec![Group::new("g1", LogicalOperator::And, vec![
		Condition::new("c1", SearchField::Skills, Operator::Contains, "react"),
	])])
}

#[test]
fn run_query_filters_and_logs_history() {
	let service = memory_service();
	let matched = service
		.run_query(&hire_testkit::candidate_pool(), &react_query(), "react devs")
		.expect("run query");

	assert_eq!(ids(&matched), ["c-1"]);

	let history = service.history.list(None).expect("history");

	assert_eq!(history.len(), 1);
	assert_eq!(history[0].search_query, "react devs");
	assert_eq!(history[0].filters, react_query());
	assert_eq!(history[0].result_count, 1);
}

#[test]
fn seeded_searches_apply_to_the_pool() {
	let service = memory_service();
	let pool = hire_testkit::candidate_pool();
	let seeded = service.saved_searches.list().expect("list");

	assert_eq!(seeded.len(), 3);

	for search in &seeded {
		let matched =
			service.apply_saved_search(search.id, &pool).expect("apply").expect("seeded search");

		assert_eq!(ids(&matched), ["c-1"], "{}", search.name);
	}
}

#[test]
fn apply_saved_search_counts_usage_and_names_history() {
	let service = memory_service();
	let saved =
		service.create_saved_search("  React  ", react_query(), None).expect("create saved search");

	assert_eq!(saved.name, "React");

	service.apply_saved_search(saved.id, &hire_testkit::candidate_pool()).expect("apply");

	let stored = service.saved_searches.get(saved.id).expect("get").expect("exists");

	assert_eq!(stored.use_count, 1);
	assert!(stored.last_used.is_some());

	let history = service.history.list(None).expect("history");

	assert_eq!(history[0].search_query, "React");
	assert_eq!(history[0].result_count, 1);
}

#[test]
fn applying_a_missing_search_has_no_side_effects() {
	let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
	let service = SearchService::with_store(kv.clone(), &memory_config());
	let applied = service
		.apply_saved_search(Uuid::new_v4(), &hire_testkit::candidate_pool())
		.expect("apply");

	assert!(applied.is_none());
	assert_eq!(kv.read(SAVED_SEARCHES_KEY).expect("read saved searches"), None);
	assert!(service.history.list(None).expect("history").is_empty());
}

#[test]
fn create_saved_search_rejects_blank_names() {
	let service = memory_service();
	let before = service.saved_searches.list().expect("list");
	let err = service.create_saved_search("   ", react_query(), None).expect_err("blank name");

	assert!(matches!(err, Error::InvalidRequest { .. }));
	assert_eq!(service.saved_searches.list().expect("list"), before);
}

#[test]
fn create_saved_search_drops_blank_descriptions() {
	let service = memory_service();
	let saved = service
		.create_saved_search("React", react_query(), Some("  ".to_string()))
		.expect("create saved search");

	assert_eq!(saved.description, None);
}

#[test]
fn explain_reports_conditions_that_never_match() {
	let service = memory_service();
	let mut query = react_query();

	query.groups[0].conditions[0].field = FieldKey::Unknown("salary".to_string());

	let problems = service.explain(&query);

	assert_eq!(problems.len(), 1);
	assert_eq!(problems[0].path, "$.groups[0].conditions[0].field");
	assert!(service.explain(&react_query()).is_empty());
}

#[test]
fn file_backend_persists_across_reopen() {
	let dir = TestDataDir::new().expect("test dir");
	let config_path = dir
		.write_file(
			"hire.toml",
			&hire_testkit::sample_config_toml(&dir.path().join("data"), false),
		)
		.expect("write config");
	let cfg = hire_config::load(&config_path).expect("load config");
	let created = {
		let service = SearchService::open(&cfg).expect("open");

		assert!(service.saved_searches.list().expect("list").is_empty());

		service.run_query(&hire_testkit::candidate_pool(), &react_query(), "react").expect("run");
		service.create_saved_search("React", react_query(), None).expect("create")
	};
	let reopened = SearchService::open(&cfg).expect("reopen");

	assert_eq!(reopened.saved_searches.list().expect("list"), vec![created]);
	assert_eq!(reopened.history.list(None).expect("history").len(), 1);
	assert!(dir.path().join("data").join("saved_searches.json").is_file());
}

#[test]
fn json_record_file_reads_candidates() {
	let dir = TestDataDir::new().expect("test dir");
	let path = dir
		.write_file(
			"candidates.json",
			&serde_json::to_string(&hire_testkit::candidate_pool()).expect("encode pool"),
		)
		.expect("write candidates");
	let records = JsonRecordFile::new(&path).records().expect("read candidates");

	assert_eq!(records, hire_testkit::candidate_pool());
	assert!(matches!(
		JsonRecordFile::new(dir.path().join("missing.json")).records(),
		Err(Error::Source { .. })
	));
}
