use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("no instructions to simulate")]
    NoInstructions,
}
