//! EngiLife study core: notes, flashcards and spaced repetition scheduling,
//! persisted through a key-value store.

pub mod config;
pub mod flashcards;
pub mod notes;
pub mod storage;
