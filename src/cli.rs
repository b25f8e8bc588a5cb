use clap::Parser;
use std::path::PathBuf;

use cors_hunter::{ScanConfig, DEFAULT_PROBE_ORIGIN};

/// Check URLs for CORS policies that trust an attacker-controlled origin
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Single URL to scan for CORS issues
    #[arg(short = 'u')]
    pub url: Option<String>,

    /// Input file containing URLs to scan (one per line)
    #[arg(short = 'i')]
    pub input: Option<PathBuf>,

    /// Output file to save results as JSON (prints to console if omitted)
    #[arg(short = 'o')]
    pub output: Option<PathBuf>,

    /// Timeout for HTTP requests in seconds (0 disables it)
    #[arg(short = 't', default_value_t = 10_u64)]
    pub timeout: u64,

    /// Number of URLs probed at once (output keeps input order)
    #[arg(short = 'c', long, default_value_t = 1_u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Origin sent in the forged `Origin` header
    #[arg(long, default_value = DEFAULT_PROBE_ORIGIN)]
    pub origin: String,

    /// Disable colored console output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig {
            url: self.url.clone().filter(|u| !u.is_empty()),
            input: self.input.clone().filter(|p| !p.as_os_str().is_empty()),
            output: self.output.clone().filter(|p| !p.as_os_str().is_empty()),
            timeout_secs: self.timeout,
            concurrency: self.concurrency as usize,
            origin: self.origin.clone(),
            color: !self.no_color,
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
