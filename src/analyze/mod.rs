pub mod cors_checker;

pub use cors_checker::{classify, CorsAnalysis};
