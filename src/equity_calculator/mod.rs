mod simulator;

pub use simulator::{estimate, estimate_parallel, SimulationResults, Simulator, SimulatorError};
