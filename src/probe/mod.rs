pub mod cors_probe;

pub use cors_probe::{scan_url, ProbeOrigin};
