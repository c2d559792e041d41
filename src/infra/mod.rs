//! Infrastructure adapters: job-file loading and output sinks.

pub mod loader;
pub mod sink;

pub use loader::{load_jobs, LoadStats};
pub use sink::{ChannelSink, StdoutSink};
