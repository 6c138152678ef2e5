//! Study notes
//!
//! A note is the unit the authoring surface edits. It owns its flashcards:
//! deleting a note deletes them too.

mod models;

pub use models::*;
