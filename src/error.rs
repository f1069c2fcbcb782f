use std::io;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

/// Process exit codes, the one contract worth keeping bit-exact:
/// `0` ok, `1` input is empty, `2` read error, `3` write error,
/// `4` format error (invalid number, inconsistent columns, unsupported
/// format, invalid operation name).
pub mod exit_code {
    pub const OK: i32 = 0;
    pub const EMPTY_INPUT: i32 = 1;
    pub const READ: i32 = 2;
    pub const WRITE: i32 = 3;
    pub const FORMAT: i32 = 4;
}

// ---------------------------------------------------------------------------
// ReadError – everything that can go wrong decoding an input source
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ReadError {
    /// The source yielded no value at all (empty file, blank interactive
    /// line, `null` or `[]` document).
    #[error("input is empty")]
    EmptyInput,

    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid number: '{token}'")]
    InvalidNumber { token: String },

    #[error("inconsistent number of columns at line {line}")]
    InconsistentColumns { line: usize },

    #[error("malformed document")]
    Json(#[from] serde_json::Error),

    #[error("url input is not implemented")]
    UrlUnsupported,
}

impl ReadError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadError::EmptyInput => exit_code::EMPTY_INPUT,
            ReadError::Io { .. } | ReadError::UrlUnsupported => exit_code::READ,
            ReadError::Json(_)
            | ReadError::InvalidNumber { .. }
            | ReadError::InconsistentColumns { .. } => exit_code::FORMAT,
        }
    }
}

// ---------------------------------------------------------------------------
// WriteError – everything that can go wrong emitting to a sink
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum WriteError {
    /// Console sinks refuse an empty value sequence; carries the
    /// empty-input code so the caller sees why there was nothing to print.
    #[error("nothing to write: value sequence is empty")]
    EmptyOutput,

    #[error("failed to write {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode document")]
    Json(#[from] serde_json::Error),

    #[error("url output is not implemented")]
    UrlUnsupported,
}

impl WriteError {
    pub fn exit_code(&self) -> i32 {
        match self {
            WriteError::EmptyOutput => exit_code::EMPTY_INPUT,
            WriteError::Io { .. } | WriteError::Json(_) | WriteError::UrlUnsupported => {
                exit_code::WRITE
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PipelineError – what run() and the CLI boundary deal in
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    /// Unrecognized operation name, source/sink/format token, or a flag
    /// missing its argument.
    #[error("{0}")]
    Usage(String),
}

impl PipelineError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Read(e) => e.exit_code(),
            PipelineError::Write(e) => e.exit_code(),
            PipelineError::Usage(_) => exit_code::FORMAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_codes() {
        assert_eq!(ReadError::EmptyInput.exit_code(), 1);
        assert_eq!(
            ReadError::Io {
                path: "x.csv".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .exit_code(),
            2
        );
        assert_eq!(
            ReadError::InvalidNumber { token: "abc".into() }.exit_code(),
            4
        );
        assert_eq!(ReadError::InconsistentColumns { line: 2 }.exit_code(), 4);
    }

    #[test]
    fn write_error_codes() {
        assert_eq!(WriteError::EmptyOutput.exit_code(), 1);
        assert_eq!(
            WriteError::Io {
                path: "out.csv".into(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn usage_errors_are_format_errors() {
        assert_eq!(PipelineError::Usage("bad".into()).exit_code(), 4);
    }
}
