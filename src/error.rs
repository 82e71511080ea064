use nom::error::ErrorKind;

/// Failure to turn an input line into a [`Motion`](crate::motion::Motion).
///
/// Lines are 1-based. Either variant aborts the whole run, no line is ever skipped.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum MotionError {
    /// The line is not `<direction> <positive count>`.
    #[error("line {line}: expected `<direction> <count>`, got {content:?} ({kind:?})")]
    ParseError {
        line: usize,
        content: String,
        kind: ErrorKind,
    },
    /// The line is well formed but the direction letter is not one of `U`, `D`, `L`, `R`.
    #[error("line {line}: invalid direction {direction:?} in {content:?}")]
    InvalidDirection {
        line: usize,
        direction: char,
        content: String,
    },
}
