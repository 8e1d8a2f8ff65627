//! Player session state for one playthrough.

use std::collections::{BTreeMap, BTreeSet};

/// A hint collected by passing a location's riddle trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedHint {
    /// Word to perform during the wormhole fight.
    pub action_word: String,
    /// How many times it must be repeated.
    pub action_count: u32,
}

/// The stored result of a resolved location visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOutcome {
    /// Whether the riddle trial was passed.
    pub passed: bool,
    /// Correct answers given during the visit.
    pub correct: u32,
}

/// Mutable state for one playthrough.
///
/// Created when a playthrough starts and discarded when it restarts. All
/// mutation goes through methods that keep the invariants: a location key
/// enters `visited` at most once, and `hints` only ever holds keys that
/// are already visited.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Raw onboarding answers in question order (place, color, mood, life).
    pub answers: Vec<String>,
    /// Assigned world key, set once after onboarding.
    pub world_key: Option<String>,
    /// Lower-cased color answer.
    pub color: Option<String>,
    /// Lower-cased mood answer.
    pub mood: Option<String>,
    /// Lower-cased life answer.
    pub life: Option<String>,
    /// Keys of locations whose riddle trial is resolved, pass or fail.
    pub visited: BTreeSet<String>,
    /// Hints earned from passed trials, keyed by location.
    pub hints: BTreeMap<String, CollectedHint>,
    /// Keys of locations already used in a wormhole fight attempt.
    pub attempted: BTreeSet<String>,
    /// Wormhole fight successes so far.
    pub successes: u32,
    outcomes: BTreeMap<String, VisitOutcome>,
}

impl PlayerState {
    /// Fresh state for a new playthrough.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the world and derive color/mood/life from the answers.
    pub fn assign_world(&mut self, key: impl Into<String>) {
        self.world_key = Some(key.into());
        self.color = self.answers.get(1).map(|s| s.to_lowercase());
        self.mood = self.answers.get(2).map(|s| s.to_lowercase());
        self.life = self.answers.get(3).map(|s| s.to_lowercase());
    }

    /// Mark a location visited. Idempotent; returns true on first insert.
    pub fn mark_visited(&mut self, key: &str) -> bool {
        self.visited.insert(key.to_string())
    }

    /// Store a visit outcome. Only the first outcome for a key is kept.
    pub fn record_outcome(&mut self, key: &str, outcome: VisitOutcome) {
        self.outcomes.entry(key.to_string()).or_insert(outcome);
    }

    /// The stored outcome of an earlier visit, if any.
    pub fn outcome(&self, key: &str) -> Option<VisitOutcome> {
        self.outcomes.get(key).copied()
    }

    /// Record a hint for a visited location.
    ///
    /// Permitted once per key, and only for keys already in `visited`.
    /// Returns true if the hint was stored.
    pub fn record_hint(&mut self, key: &str, hint: CollectedHint) -> bool {
        if !self.visited.contains(key) || self.hints.contains_key(key) {
            return false;
        }
        self.hints.insert(key.to_string(), hint);
        true
    }

    /// The hint held for a location, if any.
    pub fn hint(&self, key: &str) -> Option<&CollectedHint> {
        self.hints.get(key)
    }

    /// Mark a location used in a fight attempt. Idempotent; returns true
    /// on first insert.
    pub fn mark_attempted(&mut self, key: &str) -> bool {
        self.attempted.insert(key.to_string())
    }
}
