use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Left,  // L
    Right, // R
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(char: char) -> Result<Self, Self::Error> {
        match char {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(other),
        }
    }
}

impl From<Direction> for char {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub direction: Direction,
    pub magnitude: u32,
}

impl Instruction {
    pub fn new(direction: Direction, magnitude: u32) -> Self {
        Instruction {
            direction,
            magnitude,
        }
    }

    /// Signed movement of the dial, negative when turning left.
    pub fn delta(&self) -> i64 {
        let magnitude = i64::from(self.magnitude);
        match self.direction {
            Direction::Left => -magnitude,
            Direction::Right => magnitude,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(self.direction), self.magnitude)
    }
}
