pub mod console_reporter;
pub mod writer_json;

pub use console_reporter::{print_results, render_results, Verdict};
pub use writer_json::{read_results, write_results, ScanResult};
