//! The top-level narrative flow controller.
//!
//! `GameFlow` drives the phase sequence: onboarding, world assignment,
//! the location loop with its riddle trials, the wormhole intro, the
//! fight loop, and the ending. It is pull-based and single-threaded:
//! `choices()` exposes what the player may do next, `choose()` applies
//! exactly one selection to completion. A token outside the offered set
//! is rejected without touching any state.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use paradise_core::{CoreError, Location, World, WorldCatalog};

use crate::config::{FightRule, FlowConfig};
use crate::error::{FlowError, FlowResult};
use crate::onboarding;
use crate::presenter::Presenter;
use crate::session::PlayerState;
use crate::visit::{self, RiddleProgress, VisitStart, VisitState};

/// Token for the acknowledgment step after a resolved visit.
pub const NEXT_TOKEN: &str = "next";
/// Token for taking the fight at the wormhole intro.
pub const FIGHT_TOKEN: &str = "fight";
/// Token for ending the fight loop. Reserved: location keys must differ.
pub const END_TOKEN: &str = "end";

/// One selectable option offered to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text to render.
    pub label: String,
    /// Opaque token to pass back to `choose`.
    pub token: String,
}

impl Choice {
    /// Build a choice.
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// The phase the flow controller is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Collecting onboarding answers; `question` is the cursor.
    Onboarding {
        /// Index of the question awaiting an answer.
        question: usize,
    },
    /// Waiting for a location selection.
    LocationMenu,
    /// Mid riddle trial at a location.
    RiddleTrial(VisitState),
    /// A visit just resolved; waiting for acknowledgment.
    VisitResolved,
    /// The wormhole narrative was shown; waiting to take the fight.
    WormholeIntro,
    /// Choosing where to fight the monster.
    FightMenu,
    /// Terminal: the playthrough ended.
    Ended {
        /// Whether the victory epilogue was earned.
        victory: bool,
    },
    /// Terminal: unrecoverable configuration failure.
    Failed,
}

/// The narrative flow state machine for one playthrough.
pub struct GameFlow<P: Presenter> {
    catalog: WorldCatalog,
    config: FlowConfig,
    presenter: P,
    player: PlayerState,
    phase: Phase,
    choices: Vec<Choice>,
    rng: StdRng,
}

impl<P: Presenter> GameFlow<P> {
    /// Start a playthrough: validate the catalog, check the pass bar is
    /// reachable everywhere, seed the RNG, and ask the first question.
    pub fn new(catalog: WorldCatalog, config: FlowConfig, presenter: P) -> FlowResult<Self> {
        catalog.validate()?;
        for (_, world) in catalog.iter() {
            for location in world.locations.values() {
                let riddles = location.riddles.len();
                let required = config.pass_bar.required(riddles);
                if required as usize > riddles {
                    return Err(FlowError::UnreachablePassBar {
                        location: location.name.clone(),
                        required,
                        riddles,
                    });
                }
            }
        }

        let mut flow = Self {
            rng: StdRng::seed_from_u64(config.seed),
            catalog,
            config,
            presenter,
            player: PlayerState::new(),
            phase: Phase::Onboarding { question: 0 },
            choices: Vec::new(),
        };
        flow.presenter.narrative(onboarding::TITLE);
        flow.enter_onboarding(0);
        Ok(flow)
    }

    /// The current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The choices currently offered, in display order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The player's session state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The presenter (for frontends that batch output).
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Whether the playthrough reached a terminal phase.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Ended { .. } | Phase::Failed)
    }

    /// Discard all session state and re-enter onboarding.
    pub fn restart(&mut self) {
        self.player = PlayerState::new();
        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.presenter.narrative(onboarding::TITLE);
        self.enter_onboarding(0);
    }

    /// Apply one player selection.
    ///
    /// Tokens outside the offered set return `InvalidChoice` and leave
    /// every piece of state untouched; the frontend should re-prompt.
    pub fn choose(&mut self, token: &str) -> FlowResult<()> {
        if self.is_over() {
            return Err(FlowError::SessionOver);
        }
        if !self.choices.iter().any(|c| c.token == token) {
            return Err(FlowError::InvalidChoice(token.to_string()));
        }

        match self.phase.clone() {
            Phase::Onboarding { question } => self.answer_onboarding(question, token),
            Phase::LocationMenu => self.start_visit(token),
            Phase::RiddleTrial(state) => self.answer_riddle(state, token),
            Phase::VisitResolved => self.enter_location_menu(),
            Phase::WormholeIntro => self.enter_fight_menu(),
            Phase::FightMenu => {
                if token == END_TOKEN {
                    self.enter_ending()
                } else {
                    self.fight_at(token)
                }
            }
            Phase::Ended { .. } | Phase::Failed => Err(FlowError::SessionOver),
        }
    }

    fn enter_onboarding(&mut self, question: usize) {
        let q = &onboarding::QUESTIONS[question];
        self.presenter.narrative(q.prompt);
        self.choices = q.options.iter().map(|&o| Choice::new(o, o)).collect();
        self.phase = Phase::Onboarding { question };
    }

    fn answer_onboarding(&mut self, question: usize, token: &str) -> FlowResult<()> {
        self.player.answers.push(token.to_string());
        let next = question + 1;
        if next < onboarding::QUESTIONS.len() {
            self.enter_onboarding(next);
            Ok(())
        } else {
            self.assign_world()
        }
    }

    fn assign_world(&mut self) -> FlowResult<()> {
        let place = self.player.answers.first().cloned().unwrap_or_default();
        let Some(key) = onboarding::world_key_for_place(&place) else {
            return self.fail(CoreError::WorldNotFound(place));
        };
        let world_name = match self.catalog.get(&key) {
            Some(world) => world.name.clone(),
            None => return self.fail(CoreError::WorldNotFound(key)),
        };

        self.player.assign_world(key.as_str());
        let color = self.player.color.clone().unwrap_or_default();
        let mood = self.player.mood.clone().unwrap_or_default();
        let life = self.player.life.clone().unwrap_or_default();

        self.presenter.set_backdrop(&color);
        self.presenter.apply_mood_effect(&mood);
        self.presenter.apply_life_effect(&life);
        self.presenter.narrative(&format!(
            "Your world is ready.\nIt's a {color} {} under {mood}.\n{life} brings it to life.",
            world_name.to_lowercase()
        ));

        self.enter_location_menu()
    }

    fn enter_location_menu(&mut self) -> FlowResult<()> {
        let world = self.current_world()?;
        let remaining: Vec<(String, String)> = world
            .locations
            .iter()
            .filter(|(key, _)| !self.player.visited.contains(*key))
            .map(|(key, loc)| (key.clone(), loc.name.clone()))
            .collect();

        if remaining.is_empty() {
            return self.enter_wormhole_intro();
        }

        self.presenter.narrative("Where to go?");
        self.choices = remaining
            .into_iter()
            .map(|(key, name)| Choice::new(name, key))
            .collect();
        self.phase = Phase::LocationMenu;
        Ok(())
    }

    fn start_visit(&mut self, key: &str) -> FlowResult<()> {
        let world = self.current_world()?;
        let monster = world.monster.clone();
        let location = self.cloned_location(key)?;

        match visit::begin(
            key,
            &location,
            &monster,
            &self.player,
            &mut self.rng,
            &mut self.presenter,
        ) {
            VisitStart::Entered(state) => {
                if location.riddles.is_empty() {
                    let required = self.config.pass_bar.required(0);
                    visit::resolve(
                        &state,
                        &location,
                        required,
                        &mut self.player,
                        &mut self.presenter,
                    );
                    self.enter_resolved();
                } else {
                    self.prompt_riddle(&location, &state);
                }
                Ok(())
            }
            // The menu never offers a visited key; if a caller skips the
            // filter anyway, nothing happened and the menu is shown again.
            VisitStart::AlreadyResolved(_) => self.enter_location_menu(),
        }
    }

    fn prompt_riddle(&mut self, location: &Location, state: &VisitState) {
        if let Some(riddle) = location.riddles.get(state.riddle_index) {
            self.presenter.narrative(&riddle.prompt);
            self.choices = riddle
                .options
                .iter()
                .enumerate()
                .map(|(i, opt)| Choice::new(opt.text.clone(), i.to_string()))
                .collect();
            self.phase = Phase::RiddleTrial(state.clone());
        }
    }

    fn answer_riddle(&mut self, mut state: VisitState, token: &str) -> FlowResult<()> {
        let option: usize = token
            .parse()
            .map_err(|_| FlowError::InvalidChoice(token.to_string()))?;
        let location = self.cloned_location(&state.location_key)?;

        match visit::answer(&mut state, &location, option)? {
            RiddleProgress::Next => self.prompt_riddle(&location, &state),
            RiddleProgress::Done => {
                let required = self.config.pass_bar.required(location.riddles.len());
                visit::resolve(
                    &state,
                    &location,
                    required,
                    &mut self.player,
                    &mut self.presenter,
                );
                self.enter_resolved();
            }
        }
        Ok(())
    }

    fn enter_resolved(&mut self) {
        self.choices = vec![Choice::new("Next", NEXT_TOKEN)];
        self.phase = Phase::VisitResolved;
    }

    fn enter_wormhole_intro(&mut self) -> FlowResult<()> {
        let world = self.current_world()?;
        let text = format!(
            "A Wormhole opens in your world.\n{} cries:\n'{}'\nTime to fight the {}.",
            world.wormhole_npc, world.wormhole_cry, world.monster
        );
        self.presenter.narrative(&text);
        self.choices = vec![Choice::new("Fight", FIGHT_TOKEN)];
        self.phase = Phase::WormholeIntro;
        Ok(())
    }

    fn enter_fight_menu(&mut self) -> FlowResult<()> {
        let world = self.current_world()?;
        let monster = world.monster.clone();
        let remaining: Vec<(String, String)> = world
            .locations
            .iter()
            .filter(|(key, _)| !self.player.attempted.contains(*key))
            .map(|(key, loc)| (key.clone(), loc.name.clone()))
            .collect();
        let offer_end = !self.player.attempted.is_empty();

        self.presenter
            .narrative(&format!("Where to fight the {monster}?"));
        let mut choices: Vec<Choice> = remaining
            .into_iter()
            .map(|(key, name)| Choice::new(name, key))
            .collect();
        if offer_end {
            choices.push(Choice::new("End", END_TOKEN));
        }
        self.choices = choices;
        self.phase = Phase::FightMenu;
        Ok(())
    }

    fn fight_at(&mut self, key: &str) -> FlowResult<()> {
        let location = self.cloned_location(key)?;
        self.player.mark_attempted(key);

        let hint = self.player.hint(key).cloned();
        let success = match self.config.fight {
            FightRule::HintOnly => hint.is_some(),
            FightRule::Chance {
                with_hint,
                without_hint,
            } => {
                let p = if hint.is_some() { with_hint } else { without_hint };
                self.rng.random_bool(p.clamp(0.0, 1.0))
            }
        };

        match &hint {
            Some(h) => self.presenter.narrative(&format!(
                "You cry '{}' {} times!",
                h.action_word, h.action_count
            )),
            None => self.presenter.narrative(&format!(
                "You have no hint for {} and fight bare-handed.",
                location.name
            )),
        }

        if success {
            self.player.successes += 1;
            self.presenter.narrative(&location.success);
        } else {
            self.presenter.narrative(&location.fail);
        }

        self.enter_fight_menu()
    }

    fn enter_ending(&mut self) -> FlowResult<()> {
        let world = self.current_world()?;
        let required = self.config.victory.required(world.locations.len());
        let victory = self.player.successes >= required;
        let text = if victory {
            world.epilogue.clone()
        } else {
            world.defeat.clone()
        };

        self.presenter.narrative(&text);
        self.choices.clear();
        self.phase = Phase::Ended { victory };
        Ok(())
    }

    fn fail(&mut self, err: CoreError) -> FlowResult<()> {
        self.phase = Phase::Failed;
        self.choices.clear();
        Err(err.into())
    }

    fn current_world(&self) -> FlowResult<&World> {
        let key = self.player.world_key.as_deref().unwrap_or_default();
        Ok(self.catalog.require(key)?)
    }

    fn cloned_location(&self, key: &str) -> FlowResult<Location> {
        self.current_world()?
            .location(key)
            .cloned()
            .ok_or_else(|| FlowError::InvalidChoice(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PassBar, VictoryBar};
    use crate::presenter::Transcript;
    use paradise_core::{Riddle, RiddleOption};
    use std::collections::BTreeMap;

    /// Three riddles per location; option 0 is always the correct one.
    fn riddles() -> Vec<Riddle> {
        (0..3)
            .map(|i| Riddle {
                prompt: format!("Riddle {i}?"),
                options: vec![
                    RiddleOption {
                        text: "Right".to_string(),
                        correct: true,
                    },
                    RiddleOption {
                        text: "Wrong".to_string(),
                        correct: false,
                    },
                ],
            })
            .collect()
    }

    fn location(name: &str, word: &str) -> Location {
        Location {
            name: name.to_string(),
            npc: format!("{name} Keeper"),
            description: format!("The {name}."),
            riddles: riddles(),
            hint: format!("Say '{word}' twice."),
            action_word: word.to_string(),
            action_count: 2,
            success: format!("The {name} is saved!"),
            fail: format!("The {name} is lost."),
        }
    }

    fn sea_catalog() -> WorldCatalog {
        let world = World {
            name: "Sea".to_string(),
            monster: "Flaming Phoenix".to_string(),
            wormhole_npc: "Panicked Sailor".to_string(),
            wormhole_cry: "Save us!".to_string(),
            epilogue: "You banished the phoenix forever.".to_string(),
            defeat: "The sea boils away.".to_string(),
            locations: BTreeMap::from([
                ("1".to_string(), location("Bay", "storm")),
                ("2".to_string(), location("Grotto", "shine")),
            ]),
        };
        WorldCatalog::from_worlds(BTreeMap::from([("1".to_string(), world)])).unwrap()
    }

    fn test_config() -> FlowConfig {
        FlowConfig::default()
            .with_seed(7)
            .with_pass_bar(PassBar::Fixed(2))
    }

    fn sea_flow() -> GameFlow<Transcript> {
        GameFlow::new(sea_catalog(), test_config(), Transcript::new()).unwrap()
    }

    fn onboard(flow: &mut GameFlow<Transcript>) {
        for token in ["Sea", "Blue", "Rain", "Birds"] {
            flow.choose(token).unwrap();
        }
    }

    /// Visit a location answering enough riddles correctly to pass.
    fn pass_location(flow: &mut GameFlow<Transcript>, key: &str) {
        flow.choose(key).unwrap();
        for _ in 0..3 {
            flow.choose("0").unwrap();
        }
        flow.choose(NEXT_TOKEN).unwrap();
    }

    /// Visit a location answering every riddle wrong.
    fn fail_location(flow: &mut GameFlow<Transcript>, key: &str) {
        flow.choose(key).unwrap();
        for _ in 0..3 {
            flow.choose("1").unwrap();
        }
        flow.choose(NEXT_TOKEN).unwrap();
    }

    #[test]
    fn opens_with_title_and_first_question() {
        let flow = sea_flow();
        assert_eq!(*flow.phase(), Phase::Onboarding { question: 0 });
        assert!(flow.presenter().mentions("I will create your paradise"));
        assert!(flow.presenter().mentions("What place do you love?"));
        assert_eq!(flow.choices().len(), 5);
    }

    #[test]
    fn every_place_assigns_its_world() {
        // The built-in catalog covers all five place indices.
        let catalog = WorldCatalog::builtin().unwrap();
        for (place, key) in [
            ("Sea", "1"),
            ("Forest", "2"),
            ("Mountains", "3"),
            ("Desert", "4"),
            ("Cosmos", "5"),
        ] {
            let mut flow =
                GameFlow::new(catalog.clone(), FlowConfig::default(), Transcript::new()).unwrap();
            for token in [place, "Blue", "Silence", "Light"] {
                flow.choose(token).unwrap();
            }
            assert_eq!(flow.player().world_key.as_deref(), Some(key));
            assert_eq!(catalog.get(key).unwrap().name, place);
            assert_eq!(*flow.phase(), Phase::LocationMenu);
        }
    }

    #[test]
    fn world_assignment_fires_cosmetic_hooks_once() {
        let mut flow = sea_flow();
        onboard(&mut flow);

        let t = flow.presenter();
        assert_eq!(t.backdrops, vec!["blue"]);
        assert_eq!(t.mood_effects, vec!["rain"]);
        assert_eq!(t.life_effects, vec!["birds"]);
        assert!(t.mentions("It's a blue sea under rain"));
        assert!(t.mentions("birds brings it to life"));
    }

    #[test]
    fn invalid_token_leaves_state_untouched() {
        let mut flow = sea_flow();
        let err = flow.choose("Dragon").unwrap_err();
        assert!(matches!(err, FlowError::InvalidChoice(_)));
        assert_eq!(*flow.phase(), Phase::Onboarding { question: 0 });
        assert!(flow.player().answers.is_empty());
    }

    #[test]
    fn input_for_another_phase_is_rejected() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        assert_eq!(*flow.phase(), Phase::LocationMenu);
        // A fight acknowledgment is not a location selection.
        assert!(matches!(
            flow.choose(FIGHT_TOKEN).unwrap_err(),
            FlowError::InvalidChoice(_)
        ));
        assert_eq!(*flow.phase(), Phase::LocationMenu);
    }

    #[test]
    fn menu_excludes_visited_locations() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        assert_eq!(flow.choices().len(), 2);

        pass_location(&mut flow, "1");
        assert_eq!(*flow.phase(), Phase::LocationMenu);
        let tokens: Vec<&str> = flow.choices().iter().map(|c| c.token.as_str()).collect();
        assert_eq!(tokens, vec!["2"]);
        assert!(flow.player().visited.contains("1"));
    }

    #[test]
    fn visited_key_is_not_an_offered_token() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        assert!(matches!(
            flow.choose("1").unwrap_err(),
            FlowError::InvalidChoice(_)
        ));
        assert_eq!(flow.player().visited.len(), 1);
        assert_eq!(flow.player().hints.len(), 1);
    }

    #[test]
    fn passing_the_bar_records_the_hint() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");

        let hint = flow.player().hint("1").unwrap();
        assert_eq!(hint.action_word, "storm");
        assert_eq!(hint.action_count, 2);
        assert!(flow.presenter().mentions("Say 'storm' twice"));
    }

    #[test]
    fn failing_the_bar_records_no_hint() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        fail_location(&mut flow, "1");

        assert!(flow.player().visited.contains("1"));
        assert!(flow.player().hint("1").is_none());
        assert!(flow.presenter().mentions("not ready"));
    }

    #[test]
    fn exact_bar_passes() {
        // Two of three correct meets the Fixed(2) bar.
        let mut flow = sea_flow();
        onboard(&mut flow);
        flow.choose("1").unwrap();
        flow.choose("0").unwrap();
        flow.choose("0").unwrap();
        flow.choose("1").unwrap();
        flow.choose(NEXT_TOKEN).unwrap();

        assert!(flow.player().hint("1").is_some());
        assert_eq!(flow.player().outcome("1").unwrap().correct, 2);
    }

    #[test]
    fn all_visited_opens_the_wormhole() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        fail_location(&mut flow, "2");

        assert_eq!(*flow.phase(), Phase::WormholeIntro);
        assert!(flow.presenter().mentions("A Wormhole opens"));
        assert!(flow.presenter().mentions("Panicked Sailor"));
        assert_eq!(flow.choices(), &[Choice::new("Fight", FIGHT_TOKEN)]);
    }

    #[test]
    fn fight_menu_offers_end_only_after_an_attempt() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        fail_location(&mut flow, "2");
        flow.choose(FIGHT_TOKEN).unwrap();

        let tokens: Vec<&str> = flow.choices().iter().map(|c| c.token.as_str()).collect();
        assert_eq!(tokens, vec!["1", "2"]);

        flow.choose("1").unwrap();
        let tokens: Vec<&str> = flow.choices().iter().map(|c| c.token.as_str()).collect();
        assert_eq!(tokens, vec!["2", END_TOKEN]);
    }

    #[test]
    fn hint_only_fights_succeed_exactly_where_hinted() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        fail_location(&mut flow, "2");
        flow.choose(FIGHT_TOKEN).unwrap();

        flow.choose("1").unwrap();
        assert_eq!(flow.player().successes, 1);
        assert!(flow.presenter().mentions("You cry 'storm' 2 times!"));
        assert!(flow.presenter().mentions("The Bay is saved!"));

        flow.choose("2").unwrap();
        assert_eq!(flow.player().successes, 1);
        assert!(flow.presenter().mentions("fight bare-handed"));
        assert!(flow.presenter().mentions("The Grotto is lost."));
    }

    #[test]
    fn majority_of_successes_earns_the_epilogue() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        pass_location(&mut flow, "2");
        flow.choose(FIGHT_TOKEN).unwrap();
        flow.choose("1").unwrap();
        flow.choose("2").unwrap();
        flow.choose(END_TOKEN).unwrap();

        assert_eq!(*flow.phase(), Phase::Ended { victory: true });
        assert!(flow.presenter().mentions("banished the phoenix"));
        assert!(flow.is_over());
    }

    #[test]
    fn too_few_successes_ends_in_defeat() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        fail_location(&mut flow, "2");
        flow.choose(FIGHT_TOKEN).unwrap();
        flow.choose("1").unwrap();
        flow.choose("2").unwrap();
        flow.choose(END_TOKEN).unwrap();

        // One success out of two locations misses the majority bar of two.
        assert_eq!(*flow.phase(), Phase::Ended { victory: false });
        assert!(flow.presenter().mentions("The sea boils away."));
    }

    #[test]
    fn fixed_victory_bar_overrides_majority() {
        let config = test_config().with_victory_bar(VictoryBar::Fixed(1));
        let mut flow = GameFlow::new(sea_catalog(), config, Transcript::new()).unwrap();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        fail_location(&mut flow, "2");
        flow.choose(FIGHT_TOKEN).unwrap();
        flow.choose("1").unwrap();
        flow.choose(END_TOKEN).unwrap();

        assert_eq!(*flow.phase(), Phase::Ended { victory: true });
    }

    #[test]
    fn chance_fight_rule_uses_the_hint_odds() {
        let config = test_config().with_fight_rule(FightRule::Chance {
            with_hint: 1.0,
            without_hint: 0.0,
        });
        let mut flow = GameFlow::new(sea_catalog(), config, Transcript::new()).unwrap();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        fail_location(&mut flow, "2");
        flow.choose(FIGHT_TOKEN).unwrap();
        flow.choose("1").unwrap();
        flow.choose("2").unwrap();

        assert_eq!(flow.player().successes, 1);
    }

    #[test]
    fn session_over_rejects_further_input() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");
        pass_location(&mut flow, "2");
        flow.choose(FIGHT_TOKEN).unwrap();
        flow.choose("1").unwrap();
        flow.choose(END_TOKEN).unwrap();

        assert!(matches!(
            flow.choose(END_TOKEN).unwrap_err(),
            FlowError::SessionOver
        ));
    }

    #[test]
    fn unreachable_pass_bar_is_rejected_up_front() {
        // Three riddles per location cannot meet the original bar of four.
        let err = GameFlow::new(sea_catalog(), FlowConfig::default(), Transcript::new())
            .err()
            .expect("construction must fail");
        assert!(matches!(
            err,
            FlowError::UnreachablePassBar {
                required: 4,
                riddles: 3,
                ..
            }
        ));
    }

    #[test]
    fn fraction_pass_bar_scales_with_riddle_count() {
        let config = FlowConfig::default()
            .with_seed(7)
            .with_pass_bar(PassBar::Fraction(1.0));
        let mut flow = GameFlow::new(sea_catalog(), config, Transcript::new()).unwrap();
        onboard(&mut flow);

        // Two of three correct no longer passes at a full fraction.
        flow.choose("1").unwrap();
        flow.choose("0").unwrap();
        flow.choose("0").unwrap();
        flow.choose("1").unwrap();
        flow.choose(NEXT_TOKEN).unwrap();
        assert!(flow.player().hint("1").is_none());
    }

    #[test]
    fn restart_discards_the_session() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        pass_location(&mut flow, "1");

        flow.restart();
        assert_eq!(*flow.phase(), Phase::Onboarding { question: 0 });
        assert!(flow.player().answers.is_empty());
        assert!(flow.player().visited.is_empty());
        assert!(flow.player().hints.is_empty());
        assert_eq!(flow.choices().len(), 5);
    }

    #[test]
    fn riddle_prompts_are_surfaced_in_order() {
        let mut flow = sea_flow();
        onboard(&mut flow);
        flow.choose("1").unwrap();
        assert!(flow.presenter().mentions("Riddle 0?"));
        flow.choose("0").unwrap();
        assert!(flow.presenter().mentions("Riddle 1?"));
    }
}
