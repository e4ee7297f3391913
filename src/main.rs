use certquiz::{dataset, handle_quiz_input, logger, ui, AppState, QuizSession};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    logger::init();

    // Load and validate before touching the terminal so a bad dataset
    // is reported on a normal stderr.
    let questions = match dataset::load_bundled() {
        Ok(questions) => questions,
        Err(e) => {
            eprintln!("failed to load question dataset: {}", e);
            return Err(e);
        }
    };
    logger::log(&format!("loaded {} questions", questions.len()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app_state = if questions.is_empty() {
        AppState::Empty
    } else {
        AppState::Quiz
    };
    let mut session = QuizSession::new(questions);

    loop {
        terminal.draw(|f| match app_state {
            AppState::Quiz => ui::draw_quiz(f, &session),
            AppState::Empty => ui::draw_empty(f),
        })?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => {
                    if app_state == AppState::Quiz {
                        session = session.restart();
                    }
                }
                code => {
                    if app_state == AppState::Quiz {
                        handle_quiz_input(&mut session, code);
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
