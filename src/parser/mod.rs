mod errors;
pub use errors::{InvalidMagnitude, MissingMagnitude, ParserError, UnknownDirection};

mod instruction;
pub use instruction::{Direction, Instruction};

use crate::{dbg_line, span};

/// Turns instruction source text into [`Instruction`]s.
///
/// Every non-blank line is one instruction: a direction character followed
/// directly by the magnitude. Lines that don't fit are recorded as errors and
/// skipped, parsing always runs to the end of the input.
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    code: &'src str,
    line: usize,
    errors: Vec<ParserError>,
}

#[derive(Debug)]
pub struct ParserResult {
    pub instructions: Vec<Instruction>,
    pub errors: Vec<ParserError>,
}

impl<'src> Parser<'src> {
    pub fn new(code: &'src str) -> Self {
        Parser {
            code,
            line: 0,
            errors: Vec::new(),
        }
    }

    pub fn parse(mut self) -> ParserResult {
        let mut instructions = Vec::new();

        let mut cursor = 0;
        for raw in self.code.split_inclusive('\n') {
            let line_start = cursor;
            cursor += raw.len();
            self.line += 1;

            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let start = line_start + raw.len() - raw.trim_start().len();
            if let Some(instruction) = self.parse_line(trimmed, start) {
                instructions.push(instruction);
            }
        }

        ParserResult {
            instructions,
            errors: self.errors,
        }
    }

    /// `start` is the byte offset of `text` in the whole source.
    fn parse_line(&mut self, text: &str, start: usize) -> Option<Instruction> {
        let mut chars = text.chars();
        let first = chars.next()?;
        let magnitude = chars.as_str();
        let magnitude_start = start + first.len_utf8();

        let direction = match Direction::try_from(first) {
            Ok(direction) => direction,
            Err(actual) => {
                self.error(ParserError::UnknownDirection(UnknownDirection {
                    dbg_line: dbg_line!(),
                    line: self.line,
                    actual,
                    src: self.code.to_owned(),
                    position: span!(absolute; start, first.len_utf8()).into(),
                }));
                return None;
            }
        };

        if magnitude.is_empty() {
            self.error(ParserError::MissingMagnitude(MissingMagnitude {
                dbg_line: dbg_line!(),
                line: self.line,
                src: self.code.to_owned(),
                position: span!(absolute; magnitude_start, 0).into(),
            }));
            return None;
        }

        match magnitude.parse::<u32>() {
            Ok(magnitude) => Some(Instruction::new(direction, magnitude)),
            Err(reason) => {
                self.error(ParserError::InvalidMagnitude(InvalidMagnitude {
                    dbg_line: dbg_line!(),
                    line: self.line,
                    magnitude: magnitude.to_owned(),
                    reason: reason.to_string(),
                    src: self.code.to_owned(),
                    position: span!(magnitude_start, magnitude_start + magnitude.len()).into(),
                }));
                None
            }
        }
    }

    fn error(&mut self, error: ParserError) {
        tracing::warn!(
            line = error.line(),
            "skipping malformed instruction: {:?}",
            error.clone().into_err_report()
        );
        self.errors.push(error);
    }
}
