use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub choices_area: Rect,
    pub answer_area: Rect,
    pub help_area: Rect,
}

pub struct EmptyLayout {
    pub header_area: Rect,
    pub message_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        choices_area: chunks[2],
        answer_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_empty_chunks(area: Rect) -> EmptyLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    EmptyLayout {
        header_area: chunks[0],
        message_area: chunks[1],
        help_area: chunks[2],
    }
}
