use anyhow::{bail, Context};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Collect target URLs: the `-u` value first (if any), then every line of the
/// `-i` file in order. Blank lines and duplicates are kept as-is, and
/// non-UTF-8 bytes are replaced rather than rejected.
pub fn gather_urls(single: Option<&str>, input: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let mut urls = Vec::new();

    if let Some(u) = single.filter(|u| !u.is_empty()) {
        urls.push(u.to_string());
    }

    if let Some(path) = input {
        let file = File::open(path).with_context(|| format!("Error opening file {}", path.display()))?;
        for line in BufReader::new(file).split(b'\n') {
            let mut line = line.with_context(|| format!("Error reading file {}", path.display()))?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            // undecodable bytes stay in the URL; only that probe fails
            urls.push(String::from_utf8_lossy(&line).into_owned());
        }
        tracing::debug!(path = %path.display(), total = urls.len(), "loaded URL list");
    }

    if urls.is_empty() {
        bail!("No URLs provided. Use -u or -i flag.");
    }

    Ok(urls)
}
