//! Error types for bosun-core

use thiserror::Error;

/// Core error type for dispatch operations
#[derive(Debug, Error)]
pub enum Error {
    /// The raw identifier did not split into `namespace:command`
    #[error("you must specify the namespace and the command name (`{raw}` is not a `namespace:command` identifier)")]
    MalformedIdentifier {
        /// The identifier as supplied by the operator
        raw: String,
    },

    /// No namespace with this id is registered
    #[error("the namespace `{0}` is not available")]
    UnknownNamespace(String),

    /// The namespace exists but does not contain the command
    #[error("the namespace `{namespace}` does not have the command `{name}`")]
    UnknownCommand {
        /// Namespace that was looked up
        namespace: String,
        /// Command name that was not found
        name: String,
    },

    /// The command is declared but no handler is bound to it
    #[error("the command `{namespace}:{name}` does not have a handler to execute")]
    InvalidHandler {
        /// Owning namespace
        namespace: String,
        /// Command name
        name: String,
    },

    /// Opaque failure raised by the handler itself
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl Error {
    /// True for errors detected before any handler ran
    #[must_use]
    pub const fn is_pre_execution(&self) -> bool {
        !matches!(self, Self::Handler(_))
    }

    /// Exit code policy for host binaries: pre-execution errors map to 1,
    /// handler failures to 2
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Handler(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for bosun-core operations
pub type Result<T> = std::result::Result<T, Error>;
