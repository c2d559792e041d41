//! Core pipeline types: jobs, queues, registry, ledger, and the worker loops.

pub mod error;
pub mod executor;
pub mod job;
pub mod ledger;
pub mod queue;
pub mod registry;

pub use error::{AppResult, PipelineError};
pub use executor::{Pipeline, UnitOfWork};
pub use job::{assign_processor, Job};
pub use ledger::ProcessorLedger;
pub use queue::AdmissionQueue;
pub use registry::{ResourceClaim, ResourceRegistry};
