use std::path::PathBuf;

/// Probe origin sent in the `Origin` header unless overridden.
pub const DEFAULT_PROBE_ORIGIN: &str = "https://evil.com";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub url: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub timeout_secs: u64,
    pub concurrency: usize,
    pub origin: String,
    pub color: bool,
}

impl ScanConfig {
    /// True when at least one URL source (`-u` or `-i`) was given.
    pub fn has_url_source(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty()) || self.input.is_some()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            url: None,
            input: None,
            output: None,
            timeout_secs: 10,
            concurrency: 1,
            origin: DEFAULT_PROBE_ORIGIN.to_string(),
            color: true,
        }
    }
}
