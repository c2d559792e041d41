//! Line-oriented job-file loading.
//!
//! Input format, one job per line:
//!
//! ```text
//! <id> <type> <num_resources> <resource_id>*
//! ```
//!
//! Jobs are pushed onto the head of their queue's pending list, so within one
//! queue they are admitted in reverse file order. Every resource reference is
//! counted into the registry while jobs are built. Malformed lines and
//! out-of-range ids are fatal; nothing is retried.

use std::io::BufRead;

use tracing::info;

use crate::core::{Job, Pipeline, PipelineError, UnitOfWork};

/// Summary of one load pass.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Jobs accepted, indexed by queue (job type).
    pub jobs_per_queue: Vec<u64>,
    /// Total jobs accepted across all queues.
    pub total_jobs: u64,
}

/// Parse jobs from `reader` into the pipeline's pending lists.
///
/// Blank lines are skipped. Every queue is sealed before this returns — on
/// success and on failure — so a subsequent [`Pipeline::run`] always
/// terminates.
///
/// # Errors
///
/// Fails fast on unreadable input, malformed lines, and jobs whose type or
/// resource ids fall outside the configured ranges.
pub fn load_jobs<W: UnitOfWork, R: BufRead>(
    pipeline: &Pipeline<W>,
    reader: R,
) -> Result<LoadStats, PipelineError> {
    let result = parse_into(pipeline, reader);
    pipeline.seal();
    if let Ok(stats) = &result {
        info!(
            total_jobs = stats.total_jobs,
            queues = stats.jobs_per_queue.len(),
            "job file loaded"
        );
    }
    result
}

fn parse_into<W: UnitOfWork, R: BufRead>(
    pipeline: &Pipeline<W>,
    reader: R,
) -> Result<LoadStats, PipelineError> {
    let mut stats = LoadStats {
        jobs_per_queue: vec![0; pipeline.config().num_queues],
        total_jobs: 0,
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let job = parse_line(&line, line_no, pipeline.config().num_processors)?;
        let job_type = job.job_type;
        pipeline.submit(job)?;
        stats.jobs_per_queue[job_type] += 1;
        stats.total_jobs += 1;
    }

    Ok(stats)
}

/// Parse a single job line. Range validation happens at submission; this only
/// checks shape.
fn parse_line(line: &str, line_no: usize, num_processors: usize) -> Result<Job, PipelineError> {
    let malformed = |reason: &str| PipelineError::MalformedLine {
        line: line_no,
        reason: reason.to_string(),
    };

    let mut fields = line.split_whitespace();
    let id: u32 = fields
        .next()
        .ok_or_else(|| malformed("missing job id"))?
        .parse()
        .map_err(|_| malformed("job id is not an unsigned integer"))?;
    let job_type: usize = fields
        .next()
        .ok_or_else(|| malformed("missing job type"))?
        .parse()
        .map_err(|_| malformed("job type is not an unsigned integer"))?;
    let num_resources: usize = fields
        .next()
        .ok_or_else(|| malformed("missing resource count"))?
        .parse()
        .map_err(|_| malformed("resource count is not an unsigned integer"))?;

    let mut resources = Vec::with_capacity(num_resources);
    for _ in 0..num_resources {
        let resource: usize = fields
            .next()
            .ok_or_else(|| malformed("fewer resource ids than declared"))?
            .parse()
            .map_err(|_| malformed("resource id is not an unsigned integer"))?;
        resources.push(resource);
    }
    if fields.next().is_some() {
        return Err(malformed("more resource ids than declared"));
    }

    Ok(Job::new(id, job_type, resources, num_processors))
}
