use thiserror::Error;

use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Invalid flashcard record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlashcardError {
    /// True for unknown card or note identifiers
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CardNotFound(_) | Self::NoteNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
