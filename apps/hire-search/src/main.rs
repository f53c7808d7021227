use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = hire_search::Args::parse();

	hire_search::run(args)
}
