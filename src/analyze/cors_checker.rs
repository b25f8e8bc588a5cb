use std::collections::BTreeMap;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const INSECURE_ORIGIN_FINDING: &str = "Wildcard or insecure Origin allowed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsAnalysis {
    pub allow_origin: Option<String>,
    pub is_misconfigured: bool,
    pub vulnerabilities: Vec<String>,
}

impl CorsAnalysis {
    /// Inspect canonically-named CORS headers from a response to a request
    /// that carried `Origin: <probe_origin>`.
    ///
    /// Only `Access-Control-Allow-Origin` is checked: a wildcard or a verbatim
    /// reflection of the probe origin is a finding. Credentials and the other
    /// allow-lists are not considered.
    pub fn analyze(headers: &BTreeMap<String, String>, probe_origin: &str) -> Self {
        let mut vulnerabilities = Vec::new();

        let allow_origin = headers.get(ALLOW_ORIGIN).cloned();

        if let Some(ref origin) = allow_origin {
            if origin == "*" || origin == probe_origin {
                vulnerabilities.push(INSECURE_ORIGIN_FINDING.to_string());
            }
        }

        CorsAnalysis {
            allow_origin,
            is_misconfigured: !vulnerabilities.is_empty(),
            vulnerabilities,
        }
    }
}

pub fn classify(headers: &BTreeMap<String, String>, probe_origin: &str) -> Vec<String> {
    CorsAnalysis::analyze(headers, probe_origin).vulnerabilities
}
