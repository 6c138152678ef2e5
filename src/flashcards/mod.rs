//! Flashcard and spaced repetition system for EngiLife
//!
//! This module provides:
//! - Flashcard models with an explicit unreviewed/reviewed state
//! - The review scheduler (interval, ease factor, due date, mastery)
//! - A card repository over notes, mirrored to a key-value store

pub mod algorithm;
mod errors;
pub mod models;
pub mod repository;

pub use algorithm::SchedulerConfig;
pub use errors::{FlashcardError, Result};
pub use models::*;
pub use repository::{CardRepository, NOTES_KEY};
