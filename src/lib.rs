pub mod dataset;
pub mod logger;
pub mod models;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use dataset::load_bundled;
pub use models::{AppState, Choice, Question};
pub use session::{handle_quiz_input, QuizSession};
pub use shuffle::{shuffled, shuffled_default};
pub use ui::{draw_empty, draw_quiz};
pub use utils::truncate_to_width;
