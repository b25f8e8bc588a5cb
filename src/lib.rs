pub mod analyze;
pub mod config;
pub mod gather;
pub mod http_client;
pub mod output;
pub mod probe;
pub mod scan;

pub use crate::config::{ScanConfig, DEFAULT_PROBE_ORIGIN};
pub use crate::output::ScanResult;
