//! Error types for statement rendering and savepoint bookkeeping.

use thiserror::Error;

/// Errors raised while compiling, flattening or tracking savepoints.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A `?` placeholder has no positional parameter at its index.
    #[error("no positional parameter at index {index} for template '{template}'")]
    MissingPositional {
        /// Zero-based index of the unmatched placeholder.
        index: usize,
        /// The template being rendered.
        template: String,
    },

    /// A named placeholder has no entry in the parameter map.
    #[error("no parameter named '{name}' for template '{template}'")]
    MissingNamed {
        /// The placeholder token, sigil included.
        name: String,
        /// The template being rendered.
        template: String,
    },

    /// More positional parameters were supplied than the template consumes.
    #[error("template '{template}' consumed {used} of {supplied} positional parameters")]
    UnusedPositional {
        /// Number of placeholders in the template.
        used: usize,
        /// Number of positional parameters supplied.
        supplied: usize,
        /// The template being rendered.
        template: String,
    },

    /// NaN and infinities have no SQL literal form.
    #[error("float {0} has no SQL literal representation")]
    NonFiniteFloat(f64),

    /// `pop` or `commit` on an empty savepoint stack.
    #[error("savepoint stack underflow")]
    SavepointUnderflow,

    /// The dialect name is not recognised.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    /// The registry has no connection with this name.
    #[error("unknown connection: {0}")]
    UnknownConnection(String),

    /// The registry has no default connection configured.
    #[error("no default connection configured")]
    NoDefaultConnection,

    /// The registry document could not be parsed.
    #[error("invalid connection configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
