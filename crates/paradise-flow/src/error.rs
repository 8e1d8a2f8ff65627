//! Error types for the flow engine.

use thiserror::Error;

/// Result type for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors that can occur while driving a playthrough.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A submitted token is not among the currently offered choices.
    ///
    /// The session state is left untouched; the frontend should re-prompt.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The configured pass bar can never be met in some location.
    #[error(
        "pass bar of {required} is unreachable in \"{location}\" ({riddles} riddles)"
    )]
    UnreachablePassBar {
        /// Name of the offending location.
        location: String,
        /// Correct answers the bar demands.
        required: u32,
        /// Riddles the location actually defines.
        riddles: usize,
    },

    /// Input arrived after the playthrough reached a terminal phase.
    #[error("the session has ended")]
    SessionOver,

    /// Catalog data is missing or malformed.
    #[error("{0}")]
    Catalog(#[from] paradise_core::CoreError),
}
