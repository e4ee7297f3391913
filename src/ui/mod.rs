pub mod layout;
mod empty;
mod quiz;

pub use empty::draw_empty;
pub use layout::{calculate_empty_chunks, calculate_quiz_chunks};
pub use quiz::draw_quiz;
