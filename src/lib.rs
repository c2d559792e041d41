//! # Admission Pipeline
//!
//! A bounded, multi-queue job admission-and-execution pipeline for simulating
//! concurrent processing under constrained shared resources.
//!
//! Jobs arrive grouped by type, are admitted into a capacity-limited ring
//! buffer per type, and execute only after acquiring every resource they
//! declare as a dependency. Resources are shared across all job types, so the
//! interesting engineering is entirely in the synchronization:
//!
//! - **Bounded-buffer coordination**: each job type gets an admission queue
//!   guarded by one mutex and two condition variables. A dedicated admitter
//!   thread drains the pending list into the ring buffer, blocking when full;
//!   a dedicated executor thread drains the ring buffer, blocking when empty.
//! - **Deadlock-free multi-resource locking**: executors of different queues
//!   contend for overlapping resource sets. Every executor acquires resource
//!   locks in a single fixed global order (ascending resource id), which rules
//!   out circular waits by construction.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use admission_pipeline::builders::build_pipeline;
//! use admission_pipeline::config::SimulationConfig;
//! use admission_pipeline::infra::{load_jobs, StdoutSink};
//! use std::io::BufReader;
//! use std::fs::File;
//!
//! let config = SimulationConfig::new()
//!     .with_num_resources(16)
//!     .with_num_queues(4)
//!     .with_num_processors(8)
//!     .with_queue_capacity(8);
//!
//! let pipeline = build_pipeline(config, StdoutSink)?;
//! let stats = load_jobs(&pipeline, BufReader::new(File::open("jobs.txt")?))?;
//! pipeline.run();
//! assert_eq!(pipeline.ledger().total_completed(), stats.total_jobs);
//! ```
//!
//! Each completed job emits exactly one output line, `<id> <type> <processor>`,
//! through the configured [`core::UnitOfWork`] implementation. Everything else
//! (queue depths, ledger counts, resource counters) is observable through
//! monitoring accessors but is not part of the output contract.
//!
//! For complete examples, see `tests/pipeline_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core pipeline types: jobs, queues, registry, ledger, and the worker loops.
pub mod core;
/// Configuration model for one simulation run.
pub mod config;
/// Builders to construct a pipeline from configuration.
pub mod builders;
/// Infrastructure adapters: job-file loading and output sinks.
pub mod infra;
/// Shared utilities.
pub mod util;
