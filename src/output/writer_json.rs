use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Outcome of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cors_headers: BTreeMap<String, String>,
    #[serde(default)]
    pub misconfigurations: Vec<String>,
}

impl ScanResult {
    /// A result for a URL that never produced a response.
    pub fn failed(url: &str, marker: &str) -> Self {
        Self {
            url: url.to_string(),
            cors_headers: BTreeMap::new(),
            misconfigurations: vec![marker.to_string()],
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.misconfigurations.is_empty()
    }
}

fn null_as_empty<'de, D>(d: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(d)?.unwrap_or_default())
}

/// Write all results as one indented JSON array, replacing `path`.
pub fn write_results(path: &Path, results: &[ScanResult]) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(results).context("Error marshaling results to JSON")?;
    std::fs::write(path, data).with_context(|| format!("Error writing to file {}", path.display()))?;
    Ok(())
}

pub fn read_results(path: &Path) -> anyhow::Result<Vec<ScanResult>> {
    let data = std::fs::read_to_string(path)?;
    let results = serde_json::from_str(&data)?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_names_and_order() {
        let r = ScanResult {
            url: "https://a.example".into(),
            cors_headers: BTreeMap::from([("Access-Control-Allow-Origin".to_string(), "*".to_string())]),
            misconfigurations: vec!["Wildcard or insecure Origin allowed".into()],
        };
        let text = serde_json::to_string(&r).unwrap();
        assert_eq!(
            text,
            r#"{"url":"https://a.example","cors_headers":{"Access-Control-Allow-Origin":"*"},"misconfigurations":["Wildcard or insecure Origin allowed"]}"#
        );
    }

    #[test]
    fn test_null_headers_accepted() {
        let v = json!({"url": "https://down.example", "cors_headers": null, "misconfigurations": ["Request failed"]});
        let r: ScanResult = serde_json::from_value(v).unwrap();
        assert!(r.cors_headers.is_empty());
        assert_eq!(r, ScanResult::failed("https://down.example", "Request failed"));
    }

    #[test]
    fn test_write_overwrites_with_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale content that is longer than the new file").unwrap();

        write_results(&path, &[ScanResult::failed("x", "Request creation failed")]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"url\": \"x\""));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_results(&dir.path().join("no/such/out.json"), &[]).unwrap_err();
        assert!(err.to_string().contains("Error writing to file"));
    }
}
