use anyhow::bail;
use clap::CommandFactory;

use cors_hunter::ScanConfig;

use crate::cli::Cli;

fn init_logging(cli: &Cli) {
    // Keep reqwest/hyper at INFO so --debug shows our probe decisions, not connection churn.
    // Logs go to stderr; stdout carries scan output only.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!("cors_hunter={crate},reqwest=info,hyper=info", crate = crate_level);
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();
}

/// Fail with the usage line when neither `-u` nor `-i` was given; `main`
/// reports the error on stderr and exits 1.
fn ensure_url_source(config: &ScanConfig) -> anyhow::Result<()> {
    if !config.has_url_source() {
        bail!(
            "No URLs provided. Use -u for a single URL or -i for an input file.\n\n{}",
            Cli::command().render_usage()
        );
    }
    Ok(())
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(&cli);

    let config = cli.to_config();
    ensure_url_source(&config)?;

    tracing::debug!(?config, "parsed configuration");
    let results = cors_hunter::scan::run(&config).await?;
    cors_hunter::scan::deliver(&config, &results);
    Ok(())
}
