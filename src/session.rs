use crate::logger;
use crate::models::Question;
use crate::shuffle;
use crossterm::event::KeyCode;

/// Per-run quiz state. The shuffled order is fixed when the session is
/// built; a restart builds a whole new session rather than reshuffling
/// in place. All transitions are total: a call that is invalid in the
/// current state is a no-op, never a panic.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    selected_choice_id: Option<String>,
    images_visible: bool,
    cursor: usize,
}

impl QuizSession {
    /// Builds a session over a fresh shuffle of `dataset`. The shuffle
    /// runs exactly once here; the order never changes afterwards.
    pub fn new(dataset: Vec<Question>) -> Self {
        let order = shuffle::shuffled_default(&dataset);
        logger::log(&format!("session started with {} questions", order.len()));
        Self::from_order(order)
    }

    /// Builds a session that presents `order` as-is. `new` and the
    /// tests go through this.
    pub fn from_order(order: Vec<Question>) -> Self {
        Self {
            questions: order,
            current_index: 0,
            selected_choice_id: None,
            images_visible: true,
            cursor: 0,
        }
    }

    /// Discards nothing in place: returns a brand-new session over the
    /// same question set with a new shuffle.
    pub fn restart(&self) -> Self {
        logger::log("session restarted");
        Self::new(self.questions.clone())
    }

    // --- transitions ---

    /// First selection wins; once revealed, further selections are
    /// ignored. Any id is accepted, only the correct one is treated
    /// specially by `is_correct`.
    pub fn select(&mut self, choice_id: &str) {
        if self.is_revealed() || self.current_question().is_none() {
            return;
        }
        self.selected_choice_id = Some(choice_id.to_string());
    }

    /// Moves to the next question once the current one is revealed.
    /// On the last question this is a safe no-op; the UI greys out the
    /// control but must be able to call it anyway.
    pub fn advance(&mut self) {
        if !self.is_revealed() {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_choice_id = None;
            self.images_visible = true;
            self.cursor = 0;
        }
    }

    pub fn toggle_images(&mut self) {
        self.images_visible = !self.images_visible;
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let max = self
            .current_question()
            .map(|q| q.choices.len().saturating_sub(1))
            .unwrap_or(0);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    // --- derived reads ---

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_revealed(&self) -> bool {
        self.selected_choice_id.is_some()
    }

    pub fn is_correct(&self, choice_id: &str) -> bool {
        self.current_question()
            .map(|q| q.correct_choice_id == choice_id)
            .unwrap_or(false)
    }

    pub fn selected_choice_id(&self) -> Option<&str> {
        self.selected_choice_id.as_deref()
    }

    pub fn progress_label(&self) -> String {
        if self.questions.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.current_index + 1, self.questions.len())
        }
    }

    pub fn can_advance(&self) -> bool {
        self.is_revealed() && self.current_index + 1 < self.questions.len()
    }

    pub fn images_visible(&self) -> bool {
        self.images_visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Maps a key press onto the session's transitions. Split on the
/// reveal state the same way the draw code is: before the reveal the
/// keys drive choice selection, after it they drive advancing.
pub fn handle_quiz_input(session: &mut QuizSession, key: KeyCode) {
    if key == KeyCode::Char('i') {
        session.toggle_images();
        return;
    }

    if !session.is_revealed() {
        match key {
            KeyCode::Down | KeyCode::Char('j') => session.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => session.cursor_up(),
            KeyCode::Enter => {
                let highlighted = session
                    .current_question()
                    .and_then(|q| q.choices.get(session.cursor()))
                    .map(|c| c.id.clone());
                if let Some(id) = highlighted {
                    session.select(&id);
                }
            }
            KeyCode::Char(c) => {
                // Direct selection by choice letter.
                let matched = session.current_question().and_then(|q| {
                    q.choices
                        .iter()
                        .find(|choice| choice.id.eq_ignore_ascii_case(&c.to_string()))
                        .map(|choice| choice.id.clone())
                });
                if let Some(id) = matched {
                    session.select(&id);
                }
            }
            _ => {}
        }
    } else {
        match key {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right => session.advance(),
            _ => {}
        }
    }
}
