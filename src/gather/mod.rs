pub mod url_source;

pub use url_source::gather_urls;
