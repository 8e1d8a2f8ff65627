//! The fixed onboarding questionnaire.
//!
//! Four questions with five answers each. The place answer's 1-based index
//! is the world catalog key; the color, mood, and life answers become the
//! session's derived attributes.

/// One onboarding question and its fixed answer set.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// The question put to the player.
    pub prompt: &'static str,
    /// The five answers offered, in index order.
    pub options: [&'static str; 5],
}

/// The onboarding questionnaire, in asking order.
pub const QUESTIONS: [Question; 4] = [
    Question {
        prompt: "What place do you love?",
        options: ["Sea", "Forest", "Mountains", "Desert", "Cosmos"],
    },
    Question {
        prompt: "What color do you prefer?",
        options: ["Blue", "Green", "Red", "Yellow", "Purple"],
    },
    Question {
        prompt: "What mood do you enjoy?",
        options: ["Silence", "Noise", "Rain", "Sun", "Wind"],
    },
    Question {
        prompt: "What makes a place alive?",
        options: ["Birds", "People", "Plants", "Water", "Light"],
    },
];

/// Opening narrative shown before the first question.
pub const TITLE: &str = "I will create your paradise.\nChoose wisely.";

/// Derive the world catalog key from a place answer.
///
/// Keys are the place's 1-based index in the fixed list, so "Sea" maps to
/// "1" and "Cosmos" to "5". Unknown places yield `None`.
pub fn world_key_for_place(place: &str) -> Option<String> {
    QUESTIONS[0]
        .options
        .iter()
        .position(|&p| p == place)
        .map(|i| (i + 1).to_string())
}
