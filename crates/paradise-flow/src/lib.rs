//! Narrative flow engine for Paradise.
//!
//! Drives one playthrough of the game: the onboarding questionnaire,
//! world assignment, the location loop with its riddle trials, and the
//! closing wormhole fight. Rendering is delegated entirely to the
//! [`Presenter`] boundary; randomness comes from a seeded RNG so runs
//! are reproducible.

pub mod config;
pub mod error;
pub mod flow;
pub mod onboarding;
pub mod presenter;
pub mod riddle;
pub mod session;
pub mod visit;

pub use config::{FightRule, FlowConfig, PassBar, VictoryBar};
pub use error::{FlowError, FlowResult};
pub use flow::{Choice, GameFlow, Phase};
pub use presenter::{Presenter, Transcript};
pub use session::{CollectedHint, PlayerState, VisitOutcome};
