//! The presentation boundary.
//!
//! The flow engine never renders anything itself; it calls out through the
//! `Presenter` trait. Narrative text is fire-and-forget, and the cosmetic
//! hooks are invoked exactly once at world assignment. The engine does not
//! depend on any of them doing anything.

/// Where narrative text and cosmetic cues go.
pub trait Presenter {
    /// Show a block of story text.
    fn narrative(&mut self, text: &str);

    /// Cosmetic: recolor the backdrop for the chosen color.
    fn set_backdrop(&mut self, color: &str);

    /// Cosmetic: start the mood effect (rain, wind, ...).
    fn apply_mood_effect(&mut self, mood: &str);

    /// Cosmetic: start the life effect (birds, light, ...).
    fn apply_life_effect(&mut self, theme: &str);
}

/// A presenter that records every call.
///
/// Useful for frontends that batch output, and for asserting on narrative
/// in tests.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Narrative blocks in emission order.
    pub narratives: Vec<String>,
    /// Backdrop colors requested.
    pub backdrops: Vec<String>,
    /// Mood effects requested.
    pub mood_effects: Vec<String>,
    /// Life effects requested.
    pub life_effects: Vec<String>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any recorded narrative contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.narratives.iter().any(|n| n.contains(needle))
    }
}

impl Presenter for Transcript {
    fn narrative(&mut self, text: &str) {
        self.narratives.push(text.to_string());
    }

    fn set_backdrop(&mut self, color: &str) {
        self.backdrops.push(color.to_string());
    }

    fn apply_mood_effect(&mut self, mood: &str) {
        self.mood_effects.push(mood.to_string());
    }

    fn apply_life_effect(&mut self, theme: &str) {
        self.life_effects.push(theme.to_string());
    }
}
