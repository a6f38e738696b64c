mod errors;
pub use errors::SimulationError;

use crate::parser::Instruction;

pub const MIN_DIAL: i64 = 0;
pub const MAX_DIAL: i64 = 99;
pub const DIAL_SIZE: i64 = MAX_DIAL - MIN_DIAL + 1;
pub const DEFAULT_START: i64 = 50;
pub const TARGET_DIAL: i64 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Default for Dial {
    fn default() -> Self {
        Dial::new(DEFAULT_START)
    }
}

impl Dial {
    pub fn new(start: i64) -> Self {
        Dial {
            position: normalize(start),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn is_at_target(&self) -> bool {
        self.position == TARGET_DIAL
    }

    /// Applies one instruction and returns the new position.
    pub fn rotate(&mut self, instruction: &Instruction) -> i64 {
        self.position = normalize(self.position + instruction.delta());
        self.position
    }
}

// Result is always in MIN_DIAL..=MAX_DIAL, negatives included
fn normalize(value: i64) -> i64 {
    (value - MIN_DIAL).rem_euclid(DIAL_SIZE) + MIN_DIAL
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Simulation {
    pub position: i64,
    pub hits: usize,
    pub steps: usize,
}

/// Runs every instruction against a dial starting at [`DEFAULT_START`] and
/// counts how many times it stops on [`TARGET_DIAL`].
pub fn simulate(instructions: &[Instruction]) -> Result<Simulation, SimulationError> {
    simulate_from(Dial::default(), instructions)
}

pub fn simulate_from(
    mut dial: Dial,
    instructions: &[Instruction],
) -> Result<Simulation, SimulationError> {
    if instructions.is_empty() {
        return Err(SimulationError::NoInstructions);
    }

    let mut hits = 0;
    for (step, instruction) in instructions.iter().enumerate() {
        let position = dial.rotate(instruction);
        if dial.is_at_target() {
            hits += 1;
        }
        tracing::trace!("step {}: {} -> {} (hits: {})", step, instruction, position, hits);
    }

    Ok(Simulation {
        position: dial.position(),
        hits,
        steps: instructions.len(),
    })
}
