//! World catalog: lookup and validation of static game data.
//!
//! The catalog is keyed by the onboarding place answer's 1-based index
//! rendered as a string ("1".."5"). A built-in five-world catalog ships
//! embedded in the crate; alternate data can be loaded from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::world::World;

const BUILTIN: &str = include_str!("../data/worlds.json");

/// Read-only collection of all worlds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldCatalog {
    worlds: BTreeMap<String, World>,
}

impl WorldCatalog {
    /// Load and validate the built-in five-world catalog.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_json(BUILTIN)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(data: &str) -> CoreResult<Self> {
        let catalog: Self = serde_json::from_str(data)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build and validate a catalog from already-constructed worlds.
    pub fn from_worlds(worlds: BTreeMap<String, World>) -> CoreResult<Self> {
        let catalog = Self { worlds };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Look up a world by key.
    pub fn get(&self, key: &str) -> Option<&World> {
        self.worlds.get(key)
    }

    /// Look up a world by key, treating a miss as the configuration error
    /// it is: every reachable place index must have a catalog entry.
    pub fn require(&self, key: &str) -> CoreResult<&World> {
        self.get(key)
            .ok_or_else(|| CoreError::WorldNotFound(key.to_string()))
    }

    /// Iterate over `(key, world)` pairs in stable key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &World)> {
        self.worlds.iter().map(|(k, w)| (k.as_str(), w))
    }

    /// Number of worlds in the catalog.
    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    /// Whether the catalog contains no worlds.
    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// Check catalog shape, returning the first violation found.
    ///
    /// Every world must define at least one location, every riddle must
    /// offer at least one option, and exactly one option per riddle may be
    /// marked correct.
    pub fn validate(&self) -> CoreResult<()> {
        for (world_key, world) in &self.worlds {
            if world.locations.is_empty() {
                return Err(CoreError::NoLocations {
                    world: world_key.clone(),
                });
            }
            for (loc_key, location) in &world.locations {
                for (i, riddle) in location.riddles.iter().enumerate() {
                    if riddle.options.is_empty() {
                        return Err(CoreError::EmptyOptions {
                            world: world_key.clone(),
                            location: loc_key.clone(),
                            riddle: i,
                        });
                    }
                    let correct = riddle.options.iter().filter(|o| o.correct).count();
                    match correct {
                        1 => {}
                        0 => {
                            return Err(CoreError::NoCorrectOption {
                                world: world_key.clone(),
                                location: loc_key.clone(),
                                riddle: i,
                            });
                        }
                        count => {
                            return Err(CoreError::MultipleCorrectOptions {
                                world: world_key.clone(),
                                location: loc_key.clone(),
                                riddle: i,
                                count,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Location, Riddle, RiddleOption};

    fn yes_no(prompt: &str, yes_correct: bool) -> Riddle {
        Riddle {
            prompt: prompt.to_string(),
            options: vec![
                RiddleOption {
                    text: "Yes".to_string(),
                    correct: yes_correct,
                },
                RiddleOption {
                    text: "No".to_string(),
                    correct: !yes_correct,
                },
            ],
        }
    }

    fn tiny_world(riddles: Vec<Riddle>) -> WorldCatalog {
        let location = Location {
            name: "Cove".to_string(),
            npc: "Hermit".to_string(),
            description: "A quiet cove.".to_string(),
            riddles,
            hint: "Whisper 'tide' twice.".to_string(),
            action_word: "tide".to_string(),
            action_count: 2,
            success: "The tide turns.".to_string(),
            fail: "The tide recedes.".to_string(),
        };
        let world = World {
            name: "Sea".to_string(),
            monster: "Leviathan".to_string(),
            wormhole_npc: "Sailor".to_string(),
            wormhole_cry: "It comes!".to_string(),
            epilogue: "Peace returns.".to_string(),
            defeat: "The sea darkens.".to_string(),
            locations: [("1".to_string(), location)].into(),
        };
        WorldCatalog {
            worlds: [("1".to_string(), world)].into(),
        }
    }

    #[test]
    fn builtin_parses_and_validates() {
        let catalog = WorldCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 5);
        for key in ["1", "2", "3", "4", "5"] {
            assert!(catalog.get(key).is_some(), "missing world {key}");
        }
        assert_eq!(catalog.get("1").unwrap().name, "Sea");
        assert_eq!(catalog.get("5").unwrap().name, "Cosmos");
    }

    #[test]
    fn builtin_worlds_are_playable() {
        let catalog = WorldCatalog::builtin().unwrap();
        for (key, world) in catalog.iter() {
            assert!(!world.locations.is_empty(), "world {key} has no locations");
            for location in world.locations.values() {
                // Five riddles keeps the default pass bar of 4 reachable.
                assert_eq!(
                    location.riddles.len(),
                    5,
                    "location {} has {} riddles",
                    location.name,
                    location.riddles.len()
                );
                assert!(location.action_count >= 1);
            }
        }
    }

    #[test]
    fn require_missing_world() {
        let catalog = WorldCatalog::builtin().unwrap();
        let err = catalog.require("9").unwrap_err();
        assert!(matches!(err, CoreError::WorldNotFound(key) if key == "9"));
    }

    #[test]
    fn invalid_json_is_data_error() {
        let err = WorldCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Data(_)));
    }

    #[test]
    fn validate_accepts_exactly_one_correct() {
        assert!(tiny_world(vec![yes_no("Is the water cold?", true)])
            .validate()
            .is_ok());
    }

    #[test]
    fn validate_rejects_empty_options() {
        let catalog = tiny_world(vec![Riddle {
            prompt: "Silence?".to_string(),
            options: vec![],
        }]);
        assert!(matches!(
            catalog.validate().unwrap_err(),
            CoreError::EmptyOptions { riddle: 0, .. }
        ));
    }

    #[test]
    fn validate_rejects_no_correct_option() {
        let mut riddle = yes_no("Trick question?", true);
        for opt in &mut riddle.options {
            opt.correct = false;
        }
        assert!(matches!(
            tiny_world(vec![riddle]).validate().unwrap_err(),
            CoreError::NoCorrectOption { riddle: 0, .. }
        ));
    }

    #[test]
    fn validate_rejects_multiple_correct_options() {
        let mut riddle = yes_no("Both?", true);
        for opt in &mut riddle.options {
            opt.correct = true;
        }
        assert!(matches!(
            tiny_world(vec![riddle]).validate().unwrap_err(),
            CoreError::MultipleCorrectOptions { count: 2, .. }
        ));
    }

    #[test]
    fn validate_rejects_world_without_locations() {
        let mut catalog = tiny_world(vec![yes_no("?", true)]);
        catalog.worlds.get_mut("1").unwrap().locations.clear();
        assert!(matches!(
            catalog.validate().unwrap_err(),
            CoreError::NoLocations { .. }
        ));
    }
}
