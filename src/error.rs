use crate::parse::ParseError;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use tokio::io;

#[derive(Debug)]
pub enum ApplicationError {
    AmbiguousTarget(String, Vec<String>),
    Mismatch { expected: String, actual: String },
    Other(String),
    Parse(ParseError),
    Pattern(regex::Error),
    TargetNotFound(String),
    UnexpectedTarget(String),
    UnterminatedLine(String),
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::AmbiguousTarget(target, paths) => {
                write!(
                    formatter,
                    "target \"{}\" is ambiguous among {}",
                    target,
                    paths.join(", ")
                )
            }
            Self::Mismatch { expected, actual } => {
                write!(formatter, "expected {}, got {}", expected, actual)
            }
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Parse(error) => write!(formatter, "{}", error),
            Self::Pattern(error) => write!(formatter, "{}", error),
            Self::TargetNotFound(target) => write!(formatter, "target \"{}\" not found", target),
            Self::UnexpectedTarget(target) => {
                write!(formatter, "unexpected target \"{}\"", target)
            }
            Self::UnterminatedLine(line) => {
                write!(formatter, "unterminated continuation line \"{}\"", line)
            }
        }
    }
}

impl From<Box<dyn Error>> for ApplicationError {
    fn from(error: Box<dyn Error>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<ParseError> for ApplicationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<regex::Error> for ApplicationError {
    fn from(error: regex::Error) -> Self {
        Self::Pattern(error)
    }
}
