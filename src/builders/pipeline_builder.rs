//! Construct a shared pipeline context from configuration.

use std::sync::Arc;

use crate::config::SimulationConfig;
use crate::core::{Pipeline, PipelineError, UnitOfWork};

/// Validate `config` and build the shared pipeline context.
///
/// The returned `Arc` is the handle workers are spawned from; clone it freely
/// for monitoring while [`Pipeline::run`] is in flight.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] if the configuration fails
/// validation.
pub fn build_pipeline<W: UnitOfWork>(
    config: SimulationConfig,
    work: W,
) -> Result<Arc<Pipeline<W>>, PipelineError> {
    Ok(Arc::new(Pipeline::new(config, work)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Job;

    struct NoopWork;
    impl UnitOfWork for NoopWork {
        fn perform(&self, _job: &Job) {}
    }

    #[test]
    fn test_build_pipeline_validates_config() {
        let bad = SimulationConfig::new().with_queue_capacity(0);
        assert!(matches!(
            build_pipeline(bad, NoopWork),
            Err(PipelineError::InvalidConfig(_))
        ));

        let pipeline = build_pipeline(SimulationConfig::new(), NoopWork).unwrap();
        assert_eq!(pipeline.config().num_queues, 4);
    }
}
