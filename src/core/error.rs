//! Error types for pipeline construction and loading.

use thiserror::Error;

/// Errors produced while configuring or loading the pipeline.
///
/// Steady-state execution is infallible by design; every variant here is a
/// startup-time condition and fatal to the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A job line in the input could not be parsed.
    #[error("malformed job line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// A job declared a resource id outside the configured range.
    #[error("job {job}: resource id {resource} out of range (limit {limit})")]
    ResourceOutOfRange {
        /// Offending job id.
        job: u32,
        /// Declared resource id.
        resource: usize,
        /// Number of configured resources.
        limit: usize,
    },
    /// A job declared a type outside the configured queue range.
    #[error("job {job}: job type {job_type} out of range (limit {limit})")]
    JobTypeOutOfRange {
        /// Offending job id.
        job: u32,
        /// Declared job type.
        job_type: usize,
        /// Number of configured queues.
        limit: usize,
    },
    /// Reading the input failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
