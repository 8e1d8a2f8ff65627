//! World catalog for Paradise: worlds, locations, and riddle data.
//!
//! This crate holds the static reference data the narrative flow is driven
//! by. It has no game behavior of its own beyond loading and validating
//! catalog data; the state machine lives in `paradise-flow`.

pub mod catalog;
pub mod error;
pub mod world;

pub use catalog::WorldCatalog;
pub use error::{CoreError, CoreResult};
pub use world::{Location, Riddle, RiddleOption, World};
