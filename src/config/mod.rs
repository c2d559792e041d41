//! Configuration model for one simulation run.

pub mod sim;

pub use sim::SimulationConfig;
