use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderValue, ORIGIN};
use reqwest::Client;
use anyhow::Context;
use url::Url;

use crate::analyze::cors_checker::CorsAnalysis;
use crate::http_client::canonical_header_name;
use crate::output::writer_json::ScanResult;

pub const REQUEST_CREATION_FAILED: &str = "Request creation failed";
pub const REQUEST_FAILED: &str = "Request failed";

/// The forged origin, validated once: sent as the `Origin` header and compared
/// verbatim against `Access-Control-Allow-Origin`.
#[derive(Debug, Clone)]
pub struct ProbeOrigin {
    text: String,
    header: HeaderValue,
}

impl ProbeOrigin {
    pub fn new(origin: &str) -> anyhow::Result<Self> {
        let header = HeaderValue::from_str(origin)
            .with_context(|| format!("invalid probe origin {:?}", origin))?;
        Ok(Self { text: origin.to_string(), header })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Send one GET to `url` carrying `Origin: <origin>` and classify the CORS
/// headers of the response. Failures become marker findings, never errors.
pub async fn scan_url(client: &Client, url: &str, origin: &ProbeOrigin) -> ScanResult {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Error creating request");
            return ScanResult::failed(url, REQUEST_CREATION_FAILED);
        }
    };

    let request = match client.get(parsed).header(ORIGIN, origin.header.clone()).build() {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Error creating request");
            return ScanResult::failed(url, REQUEST_CREATION_FAILED);
        }
    };

    let response = match client.execute(request).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Error making request");
            return ScanResult::failed(url, REQUEST_FAILED);
        }
    };

    tracing::debug!(url = %url, final_url = %response.url(), status = response.status().as_u16(), "response received");
    let cors_headers = extract_cors_headers(response.headers());
    // body is never read; dropping the response releases the connection
    drop(response);

    let analysis = CorsAnalysis::analyze(&cors_headers, origin.as_str());
    if analysis.is_misconfigured {
        tracing::info!(url = %url, allow_origin = ?analysis.allow_origin, "insecure CORS policy");
    }

    ScanResult {
        url: url.to_string(),
        cors_headers,
        misconfigurations: analysis.vulnerabilities,
    }
}

/// Every header whose name contains `access-control` (any case), keyed by its
/// canonical name, with repeated values joined by `", "`.
pub fn extract_cors_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for name in headers.keys() {
        if !name.as_str().to_ascii_lowercase().contains("access-control") {
            continue;
        }
        let values: Vec<String> = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        out.insert(canonical_header_name(name.as_str()), values.join(", "));
    }
    out
}
