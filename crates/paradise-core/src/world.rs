//! World, location, and riddle data structures.
//!
//! These are immutable reference data: loaded once at startup, read by the
//! flow engine, never mutated during play.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A themed world: one boss monster and a keyed set of explorable locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Display name ("Sea", "Forest", ...).
    pub name: String,
    /// The boss monster haunting this world.
    pub monster: String,
    /// The NPC who announces the wormhole.
    pub wormhole_npc: String,
    /// What the wormhole NPC cries out.
    pub wormhole_cry: String,
    /// Victory epilogue shown when the monster is banished.
    pub epilogue: String,
    /// Defeat narrative shown when the monster prevails.
    pub defeat: String,
    /// Locations keyed by stable menu order ("1", "2", ...).
    pub locations: BTreeMap<String, Location>,
}

impl World {
    /// Keys of all locations, in stable order.
    pub fn location_keys(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Look up a location by key.
    pub fn location(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }
}

/// An explorable sub-area of a world, gated by a riddle trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Display name.
    pub name: String,
    /// The NPC met here.
    pub npc: String,
    /// Descriptive text shown on arrival.
    pub description: String,
    /// The ordered riddle trial.
    pub riddles: Vec<Riddle>,
    /// Hint granted when the trial is passed.
    pub hint: String,
    /// Word the hint instructs the player to repeat during the fight.
    pub action_word: String,
    /// How many times the action word must be repeated.
    pub action_count: u32,
    /// Fight outcome line when the monster is beaten here.
    pub success: String,
    /// Fight outcome line when the monster prevails here.
    pub fail: String,
}

/// A single riddle: a prompt and its answer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Riddle {
    /// The question put to the player.
    pub prompt: String,
    /// Answer options in display order.
    pub options: Vec<RiddleOption>,
}

impl Riddle {
    /// Index of the correct option, if exactly one exists.
    pub fn correct_index(&self) -> Option<usize> {
        let mut found = None;
        for (i, opt) in self.options.iter().enumerate() {
            if opt.correct {
                if found.is_some() {
                    return None;
                }
                found = Some(i);
            }
        }
        found
    }
}

/// One answer option of a riddle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiddleOption {
    /// Option label shown to the player.
    pub text: String,
    /// Whether choosing this option counts as a correct answer.
    pub correct: bool,
}
