//! Unit-of-work implementations that emit the completion line.
//!
//! A completed job's only observable output is one line of the form
//! `<id> <type> <processor>`, emitted exactly once while the job's resource
//! locks are held.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::{Job, UnitOfWork};

/// Emits each completion line to stdout. This is the binary's sink.
pub struct StdoutSink;

impl UnitOfWork for StdoutSink {
    fn perform(&self, job: &Job) {
        println!("{} {} {}", job.id, job.job_type, job.processor);
    }
}

/// Emits each completion line into a crossbeam channel.
///
/// Useful for embedders and tests that want to observe output order without
/// capturing stdout. The channel is unbounded so `perform` never blocks while
/// resource locks are held.
pub struct ChannelSink {
    tx: Sender<String>,
}

impl ChannelSink {
    /// Create a sink and the receiver its completion lines arrive on.
    #[must_use]
    pub fn new() -> (Self, Receiver<String>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl UnitOfWork for ChannelSink {
    fn perform(&self, job: &Job) {
        // A dropped receiver just discards output; execution is infallible.
        let _ = self
            .tx
            .send(format!("{} {} {}", job.id, job.job_type, job.processor));
    }
}
