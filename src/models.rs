use serde::Deserialize;

/// One selectable answer option. `id` is the short label shown to the
/// user ("A", "B", ...) and is unique within its question.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Choice {
    pub id: String,
    pub text: String,
}

/// A single multiple-choice question. Immutable after load; sessions
/// only reorder clones of these records, never edit them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub choices: Vec<Choice>,
    pub correct_choice_id: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Question {
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Quiz,
    Empty,
}
