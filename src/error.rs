use std::fmt::{self, Display};

/// The standard stream a write failed on.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => write!(f, "stdout"),
            Stream::Stderr => write!(f, "stderr"),
        }
    }
}

/// Everything that makes the fixture give up. None of these are recovered
/// from: they end the process with a non-zero exit status.
#[derive(PartialEq, Clone)]
pub enum Error {
    MissingEnvironmentVariable { name: String },
    InvalidExitCodeArgument { argument: String },
    OutputIoError { stream: Stream, message: String },
}

impl Error {
    pub(crate) fn output_io_error(stream: Stream, error: impl Display) -> Error {
        Error::OutputIoError {
            stream,
            message: error.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingEnvironmentVariable { name } => {
                write!(f, "echo-fixture: environment variable not set: {}", name)
            }
            Error::InvalidExitCodeArgument { argument } => write!(
                f,
                "echo-fixture: invalid exit code argument: {:?}",
                argument
            ),
            Error::OutputIoError { stream, message } => {
                write!(f, "echo-fixture: writing to {} failed: {}", stream, message)
            }
        }
    }
}

// `fn main() -> Result<(), Error>` reports errors through `Debug`.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}
