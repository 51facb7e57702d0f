use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = tally_api::Args::parse();
	tally_api::run(args).await
}
