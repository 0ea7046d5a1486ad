//! Error types for dirtree
//!
//! Everything in here is fatal: it travels up to `main` and ends the process
//! with a failure status. Per-directory access problems are not errors in this
//! sense; they live in [`crate::enumerate::DirError`] and are rendered inline.

use thiserror::Error;

/// Result type alias for dirtree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which identity database a failed lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Group,
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityKind::User => f.write_str("user"),
            IdentityKind::Group => f.write_str("group"),
        }
    }
}

/// Main error type for dirtree
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors, mostly from writing the rendered output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Owner or group name could not be resolved
    #[error("Error on getpwuid/getgrgid: no {kind} name for id {id}")]
    IdentityError {
        kind: IdentityKind,
        id: u32,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The system ran out of memory while opening a directory
    #[error("Out of memory.")]
    OutOfMemory,
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    /// Create an identity lookup error, keeping the OS error when there is one
    pub fn identity(kind: IdentityKind, id: u32, code: i32) -> Self {
        let source = (code != 0).then(|| std::io::Error::from_raw_os_error(code));
        Error::IdentityError { kind, id, source }
    }
}
