//! Location visits: one riddle trial from entry to resolution.
//!
//! A visit runs `Entering -> NarrativeShown -> RiddleLoop -> Resolved`.
//! Entry surfaces the location description and one of two NPC framings,
//! with a 20% chance of the "monster is stirring" warning. That roll is
//! display only. The riddle loop advances the cursor on
//! every answer and tallies correct ones; resolution compares the tally
//! against the pass bar, records the hint on a pass, and marks the
//! location visited either way.

use rand::Rng;
use rand::rngs::StdRng;

use paradise_core::Location;

use crate::error::FlowResult;
use crate::presenter::Presenter;
use crate::riddle::evaluate_answer;
use crate::session::{CollectedHint, PlayerState, VisitOutcome};

/// Probability of the "monster is stirring" warning on entry.
pub const STIR_CHANCE: f64 = 0.2;

/// Transient state of one visit. Created at entry, dropped at resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitState {
    /// Key of the location being visited.
    pub location_key: String,
    /// Index of the riddle awaiting an answer.
    pub riddle_index: usize,
    /// Correct answers so far this visit.
    pub correct: u32,
}

/// Result of attempting to enter a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitStart {
    /// The visit began; the first riddle awaits.
    Entered(VisitState),
    /// The location was already resolved. Nothing was mutated or shown;
    /// the prior outcome is returned as-is.
    AlreadyResolved(VisitOutcome),
}

/// Progress of the riddle loop after one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiddleProgress {
    /// More riddles remain.
    Next,
    /// The last riddle was answered; the visit is ready to resolve.
    Done,
}

/// Enter a location: surface its description and the NPC framing, and
/// reset the per-visit counters.
///
/// The menu upstream filters out visited locations, but a caller that
/// skips the filter gets a no-op with the stored prior outcome rather
/// than a duplicate visit.
pub fn begin(
    key: &str,
    location: &Location,
    monster: &str,
    player: &PlayerState,
    rng: &mut StdRng,
    presenter: &mut dyn Presenter,
) -> VisitStart {
    if let Some(prior) = player.outcome(key) {
        return VisitStart::AlreadyResolved(prior);
    }

    presenter.narrative(&format!(
        "You are in {}.\n{}",
        location.name, location.description
    ));

    // Display-only branch; the roll never touches player state.
    if rng.random_bool(STIR_CHANCE) {
        presenter.narrative(&format!(
            "{} says:\n'Beware, the {monster} stirs nearby!'",
            location.npc
        ));
    } else {
        presenter.narrative(&format!(
            "{} says:\n'Answer my riddles, and I'll help.'",
            location.npc
        ));
    }

    VisitStart::Entered(VisitState {
        location_key: key.to_string(),
        riddle_index: 0,
        correct: 0,
    })
}

/// Apply one answer to the current riddle.
///
/// The cursor advances unconditionally; only correct verdicts raise the
/// tally. An out-of-range option leaves the visit untouched.
pub fn answer(
    state: &mut VisitState,
    location: &Location,
    option: usize,
) -> FlowResult<RiddleProgress> {
    let riddle = location
        .riddles
        .get(state.riddle_index)
        .ok_or_else(|| crate::error::FlowError::InvalidChoice("no riddle awaits".to_string()))?;

    if evaluate_answer(riddle, option)? {
        state.correct += 1;
    }
    state.riddle_index += 1;

    Ok(if state.riddle_index >= location.riddles.len() {
        RiddleProgress::Done
    } else {
        RiddleProgress::Next
    })
}

/// Resolve a finished visit against the pass bar.
///
/// A pass records the location's hint; either way the key joins `visited`
/// exactly once and the outcome narrative is surfaced.
pub fn resolve(
    state: &VisitState,
    location: &Location,
    required: u32,
    player: &mut PlayerState,
    presenter: &mut dyn Presenter,
) -> VisitOutcome {
    let outcome = VisitOutcome {
        passed: state.correct >= required,
        correct: state.correct,
    };

    player.mark_visited(&state.location_key);
    player.record_outcome(&state.location_key, outcome);

    if outcome.passed {
        player.record_hint(
            &state.location_key,
            CollectedHint {
                action_word: location.action_word.clone(),
                action_count: location.action_count,
            },
        );
        presenter.narrative(&format!("{}:\n'{}'", location.npc, location.hint));
    } else {
        presenter.narrative(&format!(
            "{}:\n'You're not ready, think again.'",
            location.npc
        ));
    }

    outcome
}
