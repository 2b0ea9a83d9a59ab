//! Highlighting errors.
//!
//! Malformed names are never errors; they render unmodified. Errors are
//! raised before any output is produced and nothing is cached for a call
//! that fails.

use sigview_stack::DepthExceeded;

/// Error raised by a highlighting entry point.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    /// A descriptor the formatter needs is absent, e.g. a by-ref type
    /// whose element type was never supplied.
    #[error("missing {role} descriptor for `{owner}`")]
    NullDescriptor {
        /// What was missing, e.g. `"element type"`.
        role: &'static str,
        /// Canonical key of the descriptor that referenced it.
        owner: String,
    },

    /// The member kind has no colour category.
    #[error("unsupported member kind `{kind}` for `{member}`")]
    UnsupportedMemberKind {
        kind: &'static str,
        member: String,
    },

    /// The descriptor graph nests deeper than the configured limit.
    #[error(transparent)]
    DepthExceeded(#[from] DepthExceeded),
}

/// Result alias for highlighting operations.
pub type HighlightResult<T> = Result<T, HighlightError>;

/// Invalid palette configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid colour `{value}`: expected #RRGGBB")]
    InvalidHex { value: String },

    #[error("unknown colour category `{name}`")]
    UnknownToken { name: String },
}
