use clap::Parser;
use serde_json::Value;

use hire_domain::{Condition, Group, LogicalOperator, Operator, Query, SearchField};
use hire_search::{Args, execute};
use hire_service::SearchService;
use hire_testkit::TestDataDir;

struct Workspace {
	dir: TestDataDir,
	service: SearchService,
}
impl Workspace {
	fn new(seed_examples: bool) -> Self {
		let dir = TestDataDir::new().expect("test dir");
		let config_path = dir
			.write_file(
				"hire.toml",
				&hire_testkit::sample_config_toml(&dir.path().join("data"), seed_examples),
			)
			.expect("write config");
		let cfg = hire_config::load(&config_path).expect("load config");
		let service = SearchService::open(&cfg).expect("open service");

		dir.write_file(
			"candidates.json",
			&serde_json::to_string(&hire_testkit::candidate_pool()).expect("encode pool"),
		)
		.expect("write candidates");

		Self { dir, service }
	}

	fn path(&self, name: &str) -> String {
		self.dir.path().join(name).display().to_string()
	}

	fn write_query(&self, name: &str, query: &Query) -> String {
		self.dir
			.write_file(name, &serde_json::to_string(query).expect("encode query"))
			.expect("write query");

		self.path(name)
	}

	fn run(&self, args: &[&str]) -> color_eyre::Result<Value> {
		let config = self.path("hire.toml");
		let mut argv = vec!["hire-search", "-c", config.as_str()];

		argv.extend_from_slice(args);

		execute(&self.service, Args::try_parse_from(argv).expect("valid arguments").command)
	}
}

fn status_query(status: &str) -> Query {
	Query::new(LogicalOperator::And, vec![Group::new("g1", LogicalOperator::And, vec![
		Condition::new("c1", SearchField::Status, Operator::Equals, status),
	])])
}

fn ids(value: &Value) -> Vec<&str> {
	value
		.as_array()
		.expect("array of candidates")
		.iter()
		.filter_map(|candidate| candidate["id"].as_str())
		.collect()
}

#[test]
fn filter_prints_matches_and_records_history() {
	let workspace = Workspace::new(false);
	let query = workspace.write_query("query.json", &status_query("active"));
	let candidates = workspace.path("candidates.json");
	let output = workspace
		.run(&["filter", "--candidates", &candidates, "--query", &query, "--text", "active"])
		.expect("filter");

	assert_eq!(output["total"], 4);
	assert_eq!(output["matched"], 1);
	assert_eq!(ids(&output["candidates"]), ["c-1"]);
	assert_eq!(output["issues"], serde_json::json!([]));

	let history = workspace.run(&["history", "list"]).expect("history");

	assert_eq!(history[0]["searchQuery"], "active");
	assert_eq!(history[0]["resultCount"], 1);
}

#[test]
fn filter_reports_conditions_that_never_match() {
	let workspace = Workspace::new(false);
	let mut query = status_query("active");

	query.groups[0].conditions[0].operator = hire_domain::OperatorKey::Unknown("regex".to_string());

	let query = workspace.write_query("query.json", &query);
	let candidates = workspace.path("candidates.json");
	let output =
		workspace.run(&["filter", "--candidates", &candidates, "--query", &query]).expect("filter");

	assert_eq!(output["matched"], 0);
	assert_eq!(output["issues"][0]["path"], "$.groups[0].conditions[0].operator");
}

#[test]
fn saved_search_lifecycle() {
	let workspace = Workspace::new(false);
	let query = workspace.write_query("query.json", &status_query("inactive"));
	let created = workspace
		.run(&["saved", "create", "--name", "Inactive", "--query", &query])
		.expect("create");
	let id = created["id"].as_str().expect("id").to_string();

	assert_eq!(created["useCount"], 0);
	assert_eq!(workspace.run(&["saved", "show", &id]).expect("show")["name"], "Inactive");

	let candidates = workspace.path("candidates.json");
	let applied =
		workspace.run(&["saved", "apply", &id, "--candidates", &candidates]).expect("apply");

	assert_eq!(ids(&applied), ["c-2"]);
	assert_eq!(workspace.run(&["saved", "show", &id]).expect("show")["useCount"], 1);
	assert_eq!(workspace.run(&["saved", "default", &id]).expect("default")["isDefault"], true);

	let most_used = workspace.run(&["saved", "list", "--most-used", "1"]).expect("most used");

	assert_eq!(most_used[0]["id"], id.as_str());

	let deleted = workspace.run(&["saved", "delete", &id]).expect("delete");

	assert_eq!(deleted["deleted"], true);
	assert_eq!(workspace.run(&["saved", "delete", &id]).expect("delete")["deleted"], false);
	assert!(workspace.run(&["saved", "show", &id]).is_err());
	assert_eq!(workspace.run(&["saved", "list"]).expect("list"), serde_json::json!([]));
}

#[test]
fn saved_create_rejects_blank_names() {
	let workspace = Workspace::new(false);
	let query = workspace.write_query("query.json", &status_query("active"));

	assert!(workspace.run(&["saved", "create", "--name", "  ", "--query", &query]).is_err());
	assert_eq!(workspace.run(&["saved", "list"]).expect("list"), serde_json::json!([]));
}

#[test]
fn first_listing_returns_the_seeded_examples() {
	let workspace = Workspace::new(true);
	let listed = workspace.run(&["saved", "list"]).expect("list");

	assert_eq!(listed.as_array().map(Vec::len), Some(3));
}

#[test]
fn applying_an_unknown_search_fails_without_history() {
	let workspace = Workspace::new(false);
	let candidates = workspace.path("candidates.json");
	let unknown = uuid::Uuid::new_v4().to_string();

	assert!(workspace.run(&["saved", "apply", &unknown, "--candidates", &candidates]).is_err());
	assert_eq!(workspace.run(&["history", "list"]).expect("history"), serde_json::json!([]));
}

#[test]
fn history_clear_empties_the_log() {
	let workspace = Workspace::new(false);
	let query = workspace.write_query("query.json", &Query::default());
	let candidates = workspace.path("candidates.json");

	for _ in 0..3 {
		workspace.run(&["filter", "--candidates", &candidates, "--query", &query]).expect("filter");
	}

	let limited = workspace.run(&["history", "list", "--limit", "2"]).expect("history");

	assert_eq!(limited.as_array().map(Vec::len), Some(2));
	assert_eq!(limited[0]["resultCount"], 4);

	workspace.run(&["history", "clear"]).expect("clear");

	assert_eq!(workspace.run(&["history", "list"]).expect("history"), serde_json::json!([]));
}
