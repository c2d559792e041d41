//! The pipeline context and its admitter/executor worker loops.
//!
//! One admitter thread and one executor thread run per job-type queue, all
//! sharing a single explicitly constructed [`Pipeline`] context (queues,
//! resource registry, completion ledger). There is no thread per simulated
//! processor; "processor execution" happens synchronously inside whichever
//! executor thread dequeues the job.
//!
//! Lock nesting during completion is fixed and globally consistent: all
//! required resource locks (acquired in ascending id order), then the
//! processor lock, released in the reverse grouping. Queue locks are never
//! held across any of that.

use std::thread;

use tracing::{debug, error, info, trace};

use crate::config::SimulationConfig;

use super::error::PipelineError;
use super::job::Job;
use super::ledger::ProcessorLedger;
use super::queue::AdmissionQueue;
use super::registry::ResourceRegistry;

/// The opaque unit of work a job performs once all its resources are held.
///
/// Implementations must be non-blocking with respect to the pipeline's locks;
/// the executor calls `perform` while holding the job's resource locks. The
/// shipped implementations emit the job's output line (`<id> <type>
/// <processor>`), which is the simulation's only observable output.
pub trait UnitOfWork: Send + Sync + 'static {
    /// Run the job's side effect. Assumed infallible; there is no retry or
    /// rollback path.
    fn perform(&self, job: &Job);
}

/// Shared context for one simulation run.
///
/// Created once before any worker starts; queue, resource, and processor
/// cardinalities are fixed for its lifetime. [`Pipeline::run`] lends the
/// context to scoped worker threads and joins them all before returning, so
/// there is no ambient global state anywhere.
pub struct Pipeline<W: UnitOfWork> {
    config: SimulationConfig,
    queues: Vec<AdmissionQueue>,
    registry: ResourceRegistry,
    ledger: ProcessorLedger,
    work: W,
}

impl<W: UnitOfWork> Pipeline<W> {
    /// Build a pipeline from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: SimulationConfig, work: W) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::InvalidConfig)?;

        let queues = (0..config.num_queues)
            .map(|_| AdmissionQueue::new(config.queue_capacity))
            .collect();

        Ok(Self {
            registry: ResourceRegistry::new(config.num_resources),
            ledger: ProcessorLedger::new(config.num_processors),
            queues,
            config,
            work,
        })
    }

    /// The configuration this pipeline was built from.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The admission queue for one job type.
    ///
    /// # Panics
    ///
    /// Panics if `job_type` is out of range.
    #[must_use]
    pub fn queue(&self, job_type: usize) -> &AdmissionQueue {
        &self.queues[job_type]
    }

    /// The shared resource registry.
    #[must_use]
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// The completion ledger.
    #[must_use]
    pub fn ledger(&self) -> &ProcessorLedger {
        &self.ledger
    }

    /// Validate a job against the configured ranges and place it on its
    /// queue's pending list, counting its resource references.
    ///
    /// # Errors
    ///
    /// Rejects jobs whose type or resource ids fall outside the configured
    /// ranges; nothing is recorded for a rejected job.
    pub fn submit(&self, job: Job) -> Result<(), PipelineError> {
        if job.job_type >= self.queues.len() {
            return Err(PipelineError::JobTypeOutOfRange {
                job: job.id,
                job_type: job.job_type,
                limit: self.queues.len(),
            });
        }
        if let Some(&resource) = job.resources.iter().find(|&&r| r >= self.registry.len()) {
            return Err(PipelineError::ResourceOutOfRange {
                job: job.id,
                resource,
                limit: self.registry.len(),
            });
        }

        for &resource in &job.resources {
            self.registry.note_reference(resource);
        }
        trace!(job_id = job.id, job_type = job.job_type, "job pending");
        self.queues[job.job_type].push_pending(job);
        Ok(())
    }

    /// Signal every queue that no more work will ever arrive.
    pub fn seal(&self) {
        for queue in &self.queues {
            queue.seal();
        }
    }

    /// Run the simulation to completion.
    ///
    /// Spawns one admitter thread and one executor thread per queue, then
    /// joins them all. Workers run until their queue's pending source is
    /// exhausted; callers must [`Pipeline::seal`] the queues (the loader does
    /// this) or `run` will never return.
    pub fn run(&self) {
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.queues.len() * 2);

            for queue_id in 0..self.queues.len() {
                handles.push(
                    thread::Builder::new()
                        .name(format!("admit-{queue_id}"))
                        .spawn_scoped(scope, move || self.admit_loop(queue_id))
                        .expect("failed to spawn admitter thread"),
                );
                handles.push(
                    thread::Builder::new()
                        .name(format!("exec-{queue_id}"))
                        .spawn_scoped(scope, move || self.execute_loop(queue_id))
                        .expect("failed to spawn executor thread"),
                );
            }

            for handle in handles {
                if handle.join().is_err() {
                    error!("pipeline worker panicked");
                }
            }
        });

        info!(
            completed = self.ledger.total_completed(),
            "pipeline run complete"
        );
    }

    /// Admitter loop for one queue: drain the pending list into the ring
    /// buffer until the pending source is exhausted.
    fn admit_loop(&self, queue_id: usize) {
        debug!(queue_id, "admitter started");
        let queue = &self.queues[queue_id];
        let mut admitted: u64 = 0;
        while queue.admit_next() {
            admitted += 1;
        }
        debug!(queue_id, admitted, "admitter exiting");
    }

    /// Executor loop for one queue: dequeue admitted jobs, acquire their
    /// resources in ascending id order, perform the unit of work, and record
    /// completion.
    fn execute_loop(&self, queue_id: usize) {
        debug!(queue_id, "executor started");
        let queue = &self.queues[queue_id];
        let mut executed: u64 = 0;

        while let Some(job) = queue.take_next() {
            // The queue lock is already released here; queue synchronization
            // is fully decoupled from resource synchronization.
            let claim = self.registry.acquire_for_job(&job.resources);
            trace!(
                queue_id,
                job_id = job.id,
                locks_held = claim.held(),
                "resources acquired"
            );

            self.work.perform(&job);

            let processor = job.processor;
            self.ledger.record_completion(processor, job);
            // Resource locks release after the processor lock, preserving the
            // global nesting order.
            drop(claim);
            executed += 1;
        }

        debug!(queue_id, executed, "executor exiting");
    }
}
