//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Fixed cardinalities for one simulation run.
///
/// Loaded once at initialization; queues, resources, and processors are not
/// reconfigurable while workers are running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of exclusive resource slots shared by every job type.
    pub num_resources: usize,
    /// Number of job-type queues (one admitter/executor thread pair each).
    pub num_queues: usize,
    /// Number of simulated processors (bookkeeping buckets, not threads).
    pub num_processors: usize,
    /// Admitted ring-buffer capacity per queue.
    pub queue_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_resources: 16,
            num_queues: 4,
            num_processors: 8,
            queue_capacity: 8,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with default cardinalities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of resource slots.
    #[must_use]
    pub const fn with_num_resources(mut self, num_resources: usize) -> Self {
        self.num_resources = num_resources;
        self
    }

    /// Set the number of job-type queues.
    #[must_use]
    pub const fn with_num_queues(mut self, num_queues: usize) -> Self {
        self.num_queues = num_queues;
        self
    }

    /// Set the number of simulated processors.
    #[must_use]
    pub const fn with_num_processors(mut self, num_processors: usize) -> Self {
        self.num_processors = num_processors;
        self
    }

    /// Set the per-queue admitted-buffer capacity.
    #[must_use]
    pub const fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_queues == 0 {
            return Err("num_queues must be greater than 0".into());
        }
        if self.num_processors == 0 {
            return Err("num_processors must be greater than 0".into());
        }
        if self.queue_capacity == 0 {
            return Err("queue_capacity must be greater than 0".into());
        }
        // num_resources may be 0: jobs with empty resource lists still run.
        Ok(())
    }

    /// Parse a configuration from a JSON string and validate it.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let cfg = SimulationConfig::new()
            .with_num_resources(3)
            .with_num_queues(2)
            .with_num_processors(5)
            .with_queue_capacity(1);
        assert_eq!(cfg.num_resources, 3);
        assert_eq!(cfg.num_queues, 2);
        assert_eq!(cfg.num_processors, 5);
        assert_eq!(cfg.queue_capacity, 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cardinalities() {
        assert!(SimulationConfig::new().with_num_queues(0).validate().is_err());
        assert!(SimulationConfig::new()
            .with_num_processors(0)
            .validate()
            .is_err());
        assert!(SimulationConfig::new()
            .with_queue_capacity(0)
            .validate()
            .is_err());
        // Zero resources is allowed.
        assert!(SimulationConfig::new().with_num_resources(0).validate().is_ok());
    }

    #[test]
    fn test_from_json_str() {
        let cfg = SimulationConfig::from_json_str(
            r#"{"num_resources": 4, "num_queues": 2, "num_processors": 2, "queue_capacity": 1}"#,
        )
        .unwrap();
        assert_eq!(cfg.num_resources, 4);
        assert_eq!(cfg.queue_capacity, 1);

        assert!(SimulationConfig::from_json_str("not json").is_err());
        assert!(SimulationConfig::from_json_str(
            r#"{"num_resources": 4, "num_queues": 0, "num_processors": 2, "queue_capacity": 1}"#,
        )
        .is_err());
    }
}
