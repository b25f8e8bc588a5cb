use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};

use crate::config::ScanConfig;
use crate::gather::gather_urls;
use crate::http_client::create_scan_client;
use crate::output::{print_results, write_results, ScanResult};
use crate::probe::{scan_url, ProbeOrigin};

/// Resolve the URL list and probe every URL. Results come back in input
/// order regardless of `config.concurrency`.
pub async fn run(config: &ScanConfig) -> Result<Vec<ScanResult>> {
    if !config.has_url_source() {
        return Err(anyhow!("No URLs provided. Use -u for a single URL or -i for an input file."));
    }

    let origin = ProbeOrigin::new(&config.origin)?;
    let urls = gather_urls(config.url.as_deref(), config.input.as_deref())?;
    let client = create_scan_client(config.timeout_secs).context("failed to build HTTP client")?;

    let total = urls.len();
    let concurrency = config.concurrency.max(1);
    tracing::info!(total, concurrency, timeout = config.timeout_secs, origin = %config.origin, "Starting CORS scan");

    let client_ref = &client;
    let origin_ref = &origin;
    let results: Vec<ScanResult> = stream::iter(urls.into_iter().enumerate())
        .map(|(idx, url)| async move {
            println!("Scanning URL: {}", url);
            let result = scan_url(client_ref, &url, origin_ref).await;
            tracing::debug!("[{}/{}] {} -> {} finding(s)", idx + 1, total, url, result.misconfigurations.len());
            result
        })
        .buffered(concurrency)
        .collect()
        .await;

    let vulnerable = results.iter().filter(|r| r.is_vulnerable()).count();
    tracing::info!(total, vulnerable, "CORS scan complete");
    Ok(results)
}

/// Hand results to the configured sink: JSON file when an output path is
/// set, console otherwise. Write failures are reported, not returned.
pub fn deliver(config: &ScanConfig, results: &[ScanResult]) {
    match config.output {
        Some(ref path) => match write_results(path, results) {
            Ok(()) => println!("Results saved to file: {}", path.display()),
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "failed to save results");
                eprintln!("[!] Error writing results to {}: {:#}", path.display(), e);
            }
        },
        None => print_results(results, config.color),
    }
}
