use std::{
	fs,
	path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::eyre;
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use hire_config::Config;
use hire_domain::{Candidate, Query};
use hire_service::{Error, JsonRecordFile, RecordSource, SearchService};

#[derive(Debug, Parser)]
#[command(
	version = hire_cli::VERSION,
	rename_all = "kebab",
	styles = hire_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Evaluate a query against a candidate file.
	Filter {
		#[arg(long, value_name = "FILE")]
		candidates: PathBuf,
		#[arg(long, value_name = "FILE")]
		query: PathBuf,
		/// Free text recorded with the history entry.
		#[arg(long, default_value = "")]
		text: String,
	},
	#[command(subcommand)]
	Saved(SavedCommand),
	#[command(subcommand)]
	History(HistoryCommand),
}

#[derive(Debug, Subcommand)]
pub enum SavedCommand {
	List {
		/// Order by usage and keep the first N.
		#[arg(long, value_name = "N")]
		most_used: Option<usize>,
	},
	Show {
		id: Uuid,
	},
	Create {
		#[arg(long)]
		name: String,
		#[arg(long, value_name = "FILE")]
		query: PathBuf,
		#[arg(long)]
		description: Option<String>,
	},
	Delete {
		id: Uuid,
	},
	/// Mark a saved search as the default one.
	#[command(name = "default")]
	SetDefault {
		id: Uuid,
	},
	Apply {
		id: Uuid,
		#[arg(long, value_name = "FILE")]
		candidates: PathBuf,
	},
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
	List {
		#[arg(long, value_name = "N")]
		limit: Option<usize>,
	},
	Clear,
}

#[derive(Debug, Serialize)]
struct FilterOutput {
	total: usize,
	matched: usize,
	issues: Vec<IssueOutput>,
	candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize)]
struct IssueOutput {
	path: String,
	message: String,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = hire_config::load(&args.config)?;

	init_tracing(&config);

	tracing::debug!(
		config = ?args.config,
		backend = %config.storage.backend,
		"Configuration loaded."
	);

	let service = SearchService::open(&config)?;
	let output = execute(&service, args.command)?;
	let json = serde_json::to_string_pretty(&output)?;

	println!("{json}");

	Ok(())
}

/// Runs one command and returns the JSON document it prints.
pub fn execute(service: &SearchService, command: Command) -> color_eyre::Result<Value> {
	match command {
		Command::Filter { candidates, query, text } => {
			let records = JsonRecordFile::new(candidates).records()?;
			let query = load_query(&query)?;
			let issues = service
				.explain(&query)
				.into_iter()
				.map(|issue| IssueOutput { path: issue.path, message: issue.message })
				.collect();
			let matched = service.run_query(&records, &query, &text)?;

			to_value(&FilterOutput {
				total: records.len(),
				matched: matched.len(),
				issues,
				candidates: matched,
			})
		},
		Command::Saved(command) => execute_saved(service, command),
		Command::History(HistoryCommand::List { limit }) => to_value(&service.history.list(limit)?),
		Command::History(HistoryCommand::Clear) => {
			service.history.clear()?;

			Ok(serde_json::json!({ "cleared": true }))
		},
	}
}

fn execute_saved(service: &SearchService, command: SavedCommand) -> color_eyre::Result<Value> {
	match command {
		SavedCommand::List { most_used: Some(limit) } =>
			to_value(&service.saved_searches.most_used(limit)?),
		SavedCommand::List { most_used: None } => to_value(&service.saved_searches.list()?),
		SavedCommand::Show { id } => {
			let search = service.saved_searches.get(id)?.ok_or_else(|| not_found(id))?;

			to_value(&search)
		},
		SavedCommand::Create { name, query, description } => {
			let query = load_query(&query)?;

			to_value(&service.create_saved_search(&name, query, description)?)
		},
		SavedCommand::Delete { id } => {
			let deleted = service.saved_searches.delete(id)?;

			Ok(serde_json::json!({ "id": id, "deleted": deleted }))
		},
		SavedCommand::SetDefault { id } => {
			let search = service.saved_searches.set_default(id)?.ok_or_else(|| not_found(id))?;

			to_value(&search)
		},
		SavedCommand::Apply { id, candidates } => {
			let records = JsonRecordFile::new(candidates).records()?;
			let matched =
				service.apply_saved_search(id, &records)?.ok_or_else(|| not_found(id))?;

			to_value(&matched)
		},
	}
}

fn load_query(path: &Path) -> color_eyre::Result<Query> {
	let raw = fs::read_to_string(path)
		.map_err(|err| eyre::eyre!("Failed to read query file at {path:?}: {err}."))?;

	serde_json::from_str(&raw)
		.map_err(|err| eyre::eyre!("Failed to parse query file at {path:?}: {err}."))
}

fn not_found(id: Uuid) -> Error {
	Error::NotFound { message: format!("saved search {id} does not exist.") }
}

fn to_value<T>(value: &T) -> color_eyre::Result<Value>
where
	T: Serialize,
{
	Ok(serde_json::to_value(value)?)
}

fn init_tracing(config: &Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
