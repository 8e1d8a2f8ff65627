//! Error types for the world catalog.

use thiserror::Error;

/// Result type for catalog operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or validating catalog data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No world is defined for the requested key.
    #[error("world not found: {0}")]
    WorldNotFound(String),

    /// A world defines no locations at all.
    #[error("world \"{world}\" has no locations")]
    NoLocations {
        /// Key of the offending world.
        world: String,
    },

    /// A riddle offers no options to choose from.
    #[error("riddle {riddle} in location \"{location}\" of world \"{world}\" has no options")]
    EmptyOptions {
        /// Key of the offending world.
        world: String,
        /// Key of the offending location.
        location: String,
        /// Zero-based riddle index within the location.
        riddle: usize,
    },

    /// A riddle marks no option as correct, making it unwinnable.
    #[error(
        "riddle {riddle} in location \"{location}\" of world \"{world}\" has no correct option"
    )]
    NoCorrectOption {
        /// Key of the offending world.
        world: String,
        /// Key of the offending location.
        location: String,
        /// Zero-based riddle index within the location.
        riddle: usize,
    },

    /// A riddle marks more than one option as correct.
    #[error(
        "riddle {riddle} in location \"{location}\" of world \"{world}\" has {count} correct options"
    )]
    MultipleCorrectOptions {
        /// Key of the offending world.
        world: String,
        /// Key of the offending location.
        location: String,
        /// Zero-based riddle index within the location.
        riddle: usize,
        /// How many options were marked correct.
        count: usize,
    },

    /// Catalog data failed to parse.
    #[error("invalid catalog data: {0}")]
    Data(#[from] serde_json::Error),
}
