//! Builders to construct a pipeline from configuration.

pub mod pipeline_builder;

pub use pipeline_builder::build_pipeline;
