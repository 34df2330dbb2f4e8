pub mod aggregate;
pub mod bench;
pub mod cache;
pub mod config;
pub mod duration;
pub mod error;
pub mod extract;
pub mod metric;
pub mod report;
pub mod runner;
pub mod sanitize;

pub use bench::{Bench, BenchResults, Resumed};
pub use config::BenchConfig;
pub use error::ParseError;
pub use extract::{Extractor, Rule};
pub use metric::{Metric, Timings};
pub use runner::Runner;
