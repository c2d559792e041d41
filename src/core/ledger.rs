//! Per-processor completion bookkeeping.

use parking_lot::Mutex;

use super::job::Job;

/// Completion record for one simulated processor.
#[derive(Default)]
struct ProcessorRecord {
    completed: Vec<Job>,
    count: u64,
}

/// Append-only completion ledger, one independently locked record per
/// processor. Processors never contend with each other; an executor holds a
/// single processor lock only briefly, while already holding the job's
/// resource locks.
pub struct ProcessorLedger {
    records: Vec<Mutex<ProcessorRecord>>,
}

impl ProcessorLedger {
    /// Create a ledger with `num_processors` records.
    #[must_use]
    pub fn new(num_processors: usize) -> Self {
        Self {
            records: (0..num_processors)
                .map(|_| Mutex::new(ProcessorRecord::default()))
                .collect(),
        }
    }

    /// Number of processor records.
    #[must_use]
    pub fn num_processors(&self) -> usize {
        self.records.len()
    }

    /// Record a completed job against its processor, taking ownership of it.
    ///
    /// # Panics
    ///
    /// Panics if `processor` is out of range; processor assignment is derived
    /// from validated resource ids, so this cannot happen for loaded jobs.
    pub fn record_completion(&self, processor: usize, job: Job) {
        let mut record = self.records[processor].lock();
        record.count += 1;
        record.completed.push(job);
    }

    /// Number of jobs completed on one processor.
    #[must_use]
    pub fn completed_count(&self, processor: usize) -> u64 {
        self.records[processor].lock().count
    }

    /// Ids of the jobs completed on one processor, in completion order.
    #[must_use]
    pub fn completed_ids(&self, processor: usize) -> Vec<u32> {
        self.records[processor]
            .lock()
            .completed
            .iter()
            .map(|job| job.id)
            .collect()
    }

    /// Total completions across all processors.
    #[must_use]
    pub fn total_completed(&self) -> u64 {
        (0..self.records.len())
            .map(|processor| self.completed_count(processor))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u32, processor: usize) -> Job {
        Job {
            id,
            job_type: 0,
            resources: vec![],
            processor,
        }
    }

    #[test]
    fn test_record_and_count() {
        let ledger = ProcessorLedger::new(2);
        ledger.record_completion(0, job(1, 0));
        ledger.record_completion(0, job(2, 0));
        ledger.record_completion(1, job(3, 1));

        assert_eq!(ledger.completed_count(0), 2);
        assert_eq!(ledger.completed_count(1), 1);
        assert_eq!(ledger.total_completed(), 3);
        assert_eq!(ledger.completed_ids(0), vec![1, 2]);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = ProcessorLedger::new(4);
        assert_eq!(ledger.num_processors(), 4);
        assert_eq!(ledger.total_completed(), 0);
        assert!(ledger.completed_ids(3).is_empty());
    }
}
