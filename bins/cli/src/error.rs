use std::fmt;
use swimdesk_shared::{ErrorCode, ErrorEnvelope, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    InvalidInput = 2,
    Io = 3,
    Internal = 1,
}

impl ExitCode {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Exit code for a failed command.
    #[must_use]
    pub fn for_envelope(error: &ErrorEnvelope) -> Self {
        match error.kind {
            ErrorKind::Expected => Self::InvalidInput,
            ErrorKind::Invariant => Self::Internal,
            ErrorKind::Unexpected => {
                let io_codes = [
                    ErrorCode::io(),
                    ErrorCode::not_found(),
                    ErrorCode::permission_denied(),
                ];
                if io_codes.contains(&error.code) {
                    Self::Io
                } else {
                    Self::Internal
                }
            },
        }
    }
}

#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl CliError {
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::Io,
            Self::Serialization(_) => ExitCode::Internal,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "io error: {error}"),
            Self::Serialization(error) => write!(formatter, "serialization error: {error}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}
