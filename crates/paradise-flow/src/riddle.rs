//! Riddle evaluation.

use paradise_core::Riddle;

use crate::error::{FlowError, FlowResult};

/// Evaluate one answer submission against a riddle.
///
/// Pure over the riddle's option list; the running correct-count belongs
/// to the visit, not to this function. An out-of-range index means the
/// frontend submitted something it was never offered, reported as
/// `InvalidChoice` so the flow can re-prompt instead of crashing.
pub fn evaluate_answer(riddle: &Riddle, option: usize) -> FlowResult<bool> {
    riddle
        .options
        .get(option)
        .map(|o| o.correct)
        .ok_or_else(|| {
            FlowError::InvalidChoice(format!(
                "option {option} of {}",
                riddle.options.len()
            ))
        })
}
