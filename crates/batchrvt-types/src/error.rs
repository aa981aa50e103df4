use std::fmt;
use std::path::PathBuf;

/// Result type for batchrvt-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or writing script data
#[derive(Debug)]
pub enum Error {
    /// The file to read does not exist
    NotFound(PathBuf),

    /// Content is not valid JSON, has the wrong shape, or is not an integer
    Malformed(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Path does not follow the session file naming convention
    InvalidPath(PathBuf),

    /// Data folder could not be determined
    Config(String),
}

/// Coarse classification of an [`Error`], for callers that only branch on the cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Malformed,
    Io,
    InvalidPath,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Malformed(_) => ErrorKind::Malformed,
            Error::Io(_) => ErrorKind::Io,
            Error::InvalidPath(_) => ErrorKind::InvalidPath,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// Map an IO error that happened while reading `path`.
    ///
    /// A missing file is reported as [`Error::NotFound`] so that a file deleted
    /// between an existence check and the read is indistinguishable from one
    /// that never existed. Content that is not valid UTF-8 is [`Error::Malformed`].
    pub fn from_read(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.into()),
            std::io::ErrorKind::InvalidData => {
                Error::Malformed(format!("{}: {}", path.into().display(), err))
            }
            _ => Error::Io(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::Malformed(msg) => write!(f, "Malformed content: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidPath(path) => {
                write!(f, "Not a session script data path: {}", path.display())
            }
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::NotFound(_)
            | Error::Malformed(_)
            | Error::InvalidPath(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Malformed(err.to_string())
        }
    }
}
