use miette::{Diagnostic, ErrReport, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum ParserError {
    UnknownDirection(UnknownDirection),
    MissingMagnitude(MissingMagnitude),
    InvalidMagnitude(InvalidMagnitude),
}

impl ParserError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }

    /// 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParserError::UnknownDirection(e) => e.line,
            ParserError::MissingMagnitude(e) => e.line,
            ParserError::InvalidMagnitude(e) => e.line,
        }
    }
}

impl From<ParserError> for ErrReport {
    fn from(error: ParserError) -> Self {
        match error {
            ParserError::UnknownDirection(e) => ErrReport::from(e),
            ParserError::MissingMagnitude(e) => ErrReport::from(e),
            ParserError::InvalidMagnitude(e) => ErrReport::from(e),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("unknown-direction")]
#[diagnostic(
    code(parser::unknown_direction),
    help("[{}] Expected 'L' or 'R', got {:?} instead", self.dbg_line, self.actual),
)]
pub struct UnknownDirection {
    pub dbg_line: String,
    pub line: usize,
    pub actual: char,
    #[source_code]
    pub src: String,
    #[label("Unknown direction: {:?}", self.actual)]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("missing-magnitude")]
#[diagnostic(
    code(parser::missing_magnitude),
    help("[{}] Put the number of clicks right after the direction, e.g. \"L12\"", self.dbg_line),
)]
pub struct MissingMagnitude {
    pub dbg_line: String,
    pub line: usize,
    #[source_code]
    pub src: String,
    #[label("Magnitude is missing right here")]
    pub position: SourceSpan,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("invalid-magnitude")]
#[diagnostic(
    code(parser::invalid_magnitude),
    help("[{}] {:?} is not a valid magnitude: {}", self.dbg_line, self.magnitude, self.reason),
)]
pub struct InvalidMagnitude {
    pub dbg_line: String,
    pub line: usize,
    pub magnitude: String,
    pub reason: String,
    #[source_code]
    pub src: String,
    #[label("Invalid magnitude: {:?}", self.magnitude)]
    pub position: SourceSpan,
}
