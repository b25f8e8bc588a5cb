mod cli;
mod runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Errors returned here exit with status 1
    runner::run_from_cli(cli::parse_cli()).await
}
