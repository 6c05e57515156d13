pub mod metrics;
pub mod notes;
pub mod prompts;
pub mod providers;

pub use notes::{DegradedReason, NoteOutcome, NotesGenerator, TextGeneration};
