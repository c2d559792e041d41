//! Job records and processor assignment.

use serde::{Deserialize, Serialize};

/// An immutable description of one unit of admitted work.
///
/// A job is owned by exactly one container at any instant: its queue's pending
/// list, the admitted ring buffer, the executor's hands while in flight, or a
/// processor's completed list. Ownership transfer is always a move; the same
/// job value flows through all four.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier from the input file.
    pub id: u32,
    /// Job type, indexing the admission queue this job belongs to.
    pub job_type: usize,
    /// Resource ids this job must hold before executing. Duplicates are
    /// allowed and the list may be empty.
    pub resources: Vec<usize>,
    /// Processor this job's completion is recorded against.
    pub processor: usize,
}

impl Job {
    /// Build a job, deriving its processor from the resource list.
    #[must_use]
    pub fn new(id: u32, job_type: usize, resources: Vec<usize>, num_processors: usize) -> Self {
        let processor = assign_processor(&resources, num_processors);
        Self {
            id,
            job_type,
            resources,
            processor,
        }
    }
}

/// Assign a processor to a job: the highest resource id it references, modulo
/// the processor count. A job with no resources lands on processor 0.
#[must_use]
pub fn assign_processor(resources: &[usize], num_processors: usize) -> usize {
    resources.iter().copied().max().unwrap_or(0) % num_processors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_processor_takes_max_resource() {
        assert_eq!(assign_processor(&[3, 7, 1], 16), 7);
        assert_eq!(assign_processor(&[3, 7, 1], 4), 3); // 7 % 4
    }

    #[test]
    fn test_assign_processor_empty_resources() {
        assert_eq!(assign_processor(&[], 8), 0);
    }

    #[test]
    fn test_job_new_derives_processor() {
        let job = Job::new(42, 1, vec![2, 9, 5], 4);
        assert_eq!(job.id, 42);
        assert_eq!(job.job_type, 1);
        assert_eq!(job.processor, 1); // 9 % 4
    }
}
