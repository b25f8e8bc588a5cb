use reqwest::{Client, ClientBuilder};
use std::time::Duration;

const USER_AGENT: &str = concat!("cors_hunter/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by every probe. `timeout_secs` bounds each request
/// individually, not the whole run; 0 disables the timeout.
pub fn create_scan_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let mut builder = ClientBuilder::new();
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    let client = builder
        .use_rustls_tls()
        // Redirects are followed; headers come from the final response
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// MIME canonical form of a header name: `access-control-allow-origin`
/// becomes `Access-Control-Allow-Origin`.
pub fn canonical_header_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        upper = c == '-';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(create_scan_client(10).is_ok());
        assert!(create_scan_client(0).is_ok());
    }

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("access-control-allow-origin"), "Access-Control-Allow-Origin");
        assert_eq!(canonical_header_name("ACCESS-CONTROL-MAX-AGE"), "Access-Control-Max-Age");
        assert_eq!(canonical_header_name("x-access-control-foo"), "X-Access-Control-Foo");
        assert_eq!(canonical_header_name("vary"), "Vary");
    }
}
