use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    InvalidInput = 10,
    InvalidRedirect = 11,
    IoError = 12,
    UnknownCodec = 13,
    MissingParameter = 14,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

/// Coarse classification used by the HTTP and CLI boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownCodec,
    MissingParameter,
    CodecError,
    InvalidRedirectTarget,
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    Exact(usize),
    MultipleOf(usize),
}

impl std::fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthConstraint::Exact(n) => write!(f, "exactly {}", n),
            LengthConstraint::MultipleOf(n) => write!(f, "multiple of {}", n),
        }
    }
}

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("unknown codec: {name}")]
    UnknownCodec { name: String },

    #[error("missing parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: LengthConstraint, actual: usize },

    #[error("invalid padding: {message}")]
    InvalidPadding { message: String },

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("invalid redirect target: {target}")]
    InvalidRedirectTarget { target: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranscodeError::UnknownCodec { .. } => ErrorKind::UnknownCodec,
            TranscodeError::MissingParameter { .. } => ErrorKind::MissingParameter,
            TranscodeError::InvalidInput { .. }
            | TranscodeError::InvalidCharacter { .. }
            | TranscodeError::InvalidLength { .. }
            | TranscodeError::InvalidPadding { .. }
            | TranscodeError::InvalidUtf8(_) => ErrorKind::CodecError,
            TranscodeError::InvalidRedirectTarget { .. } => ErrorKind::InvalidRedirectTarget,
            TranscodeError::Io(_) => ErrorKind::Io,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::CodecError => ExitCode::InvalidInput,
            ErrorKind::InvalidRedirectTarget => ExitCode::InvalidRedirect,
            ErrorKind::Io => ExitCode::IoError,
            ErrorKind::UnknownCodec => ExitCode::UnknownCodec,
            ErrorKind::MissingParameter => ExitCode::MissingParameter,
        }
    }

    /// Status code the HTTP boundary answers with. Every failure caused by the
    /// request itself is a 400.
    pub fn http_status(&self) -> u16 {
        match self.kind() {
            ErrorKind::Io => 500,
            _ => 400,
        }
    }

    // Helper constructors for common error patterns
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_length(expected: LengthConstraint, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    pub fn invalid_padding(message: impl Into<String>) -> Self {
        Self::InvalidPadding {
            message: message.into(),
        }
    }

    pub fn unknown_codec(name: impl Into<String>) -> Self {
        Self::UnknownCodec { name: name.into() }
    }

    pub fn missing(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }

    pub fn invalid_redirect(target: impl Into<String>) -> Self {
        Self::InvalidRedirectTarget {
            target: target.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TranscodeError>;
