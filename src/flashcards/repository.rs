//! Card repository over notes
//!
//! All notes live in memory and are mirrored to the key-value store as one
//! JSON array under [`NOTES_KEY`] after every change:
//! ```text
//! engilife.notes -> [ { "id", "title", ..., "flashcards": [ ... ] }, ... ]
//! ```

use chrono::NaiveDate;

use super::algorithm::{self, SchedulerConfig};
use super::errors::{FlashcardError, Result};
use super::models::*;
use crate::notes::{normalize_tags, Note, NoteUpdate};
use crate::storage::KeyValueStore;

/// Store key holding every note and its flashcards
pub const NOTES_KEY: &str = "engilife.notes";

/// Repository of notes and the flashcards they own
pub struct CardRepository<S: KeyValueStore> {
    store: S,
    config: SchedulerConfig,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> CardRepository<S> {
    /// Load notes from the store; a missing key gives an empty repository
    pub fn load(store: S, config: SchedulerConfig) -> Result<Self> {
        let notes = match store.get(NOTES_KEY)? {
            Some(content) => serde_json::from_str::<Vec<Note>>(&content)?,
            None => Vec::new(),
        };

        log::info!(
            "Loaded {} notes with {} flashcards",
            notes.len(),
            notes.iter().map(|n| n.flashcards.len()).sum::<usize>()
        );

        Ok(Self { store, config, notes })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Write all notes to the store
    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.store.set(NOTES_KEY, &json)?;
        Ok(())
    }

    fn note_index(&self, note_id: &str) -> Result<usize> {
        self.notes
            .iter()
            .position(|n| n.id == note_id)
            .ok_or_else(|| FlashcardError::NoteNotFound(note_id.to_string()))
    }

    /// Locate a card as (note index, card index)
    fn card_position(&self, card_id: &str) -> Result<(usize, usize)> {
        self.notes
            .iter()
            .enumerate()
            .find_map(|(ni, note)| {
                note.flashcards
                    .iter()
                    .position(|c| c.id == card_id)
                    .map(|ci| (ni, ci))
            })
            .ok_or_else(|| FlashcardError::CardNotFound(card_id.to_string()))
    }

    // ==================== Note Operations ====================

    /// List all notes in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Get a specific note
    pub fn get_note(&self, note_id: &str) -> Result<&Note> {
        let idx = self.note_index(note_id)?;
        Ok(&self.notes[idx])
    }

    /// Create a new note
    pub fn create_note(&mut self, title: String, content: String, tags: Vec<String>) -> Result<Note> {
        let note = Note::new(title, content).with_tags(tags);
        self.notes.push(note.clone());
        self.persist()?;

        log::info!("Created note {} ({})", note.id, note.title);
        Ok(note)
    }

    /// Update a note's title, content or tags
    pub fn update_note(&mut self, note_id: &str, update: NoteUpdate) -> Result<Note> {
        let idx = self.note_index(note_id)?;
        let note = &mut self.notes[idx];

        if let Some(title) = update.title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(tags) = update.tags {
            note.tags = normalize_tags(tags);
        }
        note.touch();

        let note = note.clone();
        self.persist()?;
        Ok(note)
    }

    /// Delete a note and all its flashcards
    pub fn delete_note(&mut self, note_id: &str) -> Result<Note> {
        let idx = self.note_index(note_id)?;
        let note = self.notes.remove(idx);
        self.persist()?;

        log::info!(
            "Deleted note {} with {} flashcards",
            note.id,
            note.flashcards.len()
        );
        Ok(note)
    }

    // ==================== Card Operations ====================

    /// Iterate over every card, in note-then-card order
    pub fn cards(&self) -> impl Iterator<Item = &Flashcard> {
        self.notes.iter().flat_map(|n| n.flashcards.iter())
    }

    /// Get a specific card
    pub fn get(&self, card_id: &str) -> Result<&Flashcard> {
        let (ni, ci) = self.card_position(card_id)?;
        Ok(&self.notes[ni].flashcards[ci])
    }

    /// Get the note owning a card
    pub fn owner_of(&self, card_id: &str) -> Result<&Note> {
        let (ni, _) = self.card_position(card_id)?;
        Ok(&self.notes[ni])
    }

    /// Append a new card to a note
    pub fn add_flashcard(&mut self, note_id: &str, question: String, answer: String) -> Result<Flashcard> {
        let idx = self.note_index(note_id)?;
        let card = Flashcard::new(question, answer);

        let note = &mut self.notes[idx];
        note.flashcards.push(card.clone());
        note.touch();
        self.persist()?;

        Ok(card)
    }

    /// Remove a card from its note
    pub fn remove_flashcard(&mut self, card_id: &str) -> Result<Flashcard> {
        let (ni, ci) = self.card_position(card_id)?;

        let note = &mut self.notes[ni];
        let card = note.flashcards.remove(ci);
        note.touch();
        self.persist()?;

        Ok(card)
    }

    /// Replace the stored card with the same identifier
    ///
    /// An unchanged record leaves the repository and the store untouched.
    pub fn update(&mut self, card: &Flashcard) -> Result<()> {
        let (ni, ci) = self.card_position(&card.id)?;

        let note = &mut self.notes[ni];
        if note.flashcards[ci] == *card {
            log::debug!("Card {} unchanged, skipping update", card.id);
            return Ok(());
        }

        note.flashcards[ci] = card.clone();
        note.touch();
        self.persist()
    }

    // ==================== Review Operations ====================

    /// Get all cards due on `as_of`
    ///
    /// Never-reviewed cards come first in note-then-card order, followed by
    /// reviewed cards with the oldest due date first.
    pub fn get_due(&self, as_of: NaiveDate) -> Vec<Flashcard> {
        let (mut due, mut scheduled): (Vec<&Flashcard>, Vec<&Flashcard>) = self
            .cards()
            .filter(|c| c.is_due(as_of))
            .partition(|c| !c.is_reviewed());

        // Stable sort keeps insertion order among equal due dates
        scheduled.sort_by_key(|c| c.due_date());
        due.append(&mut scheduled);

        due.into_iter().cloned().collect()
    }

    /// Submit a review for a card and store the result
    pub fn review(&mut self, card_id: &str, quality: Quality, today: NaiveDate) -> Result<Flashcard> {
        let card = self.get(card_id)?;
        let updated = algorithm::review(card, quality, today, &self.config);
        self.update(&updated)?;

        log::info!(
            "Reviewed card {} as {}: next in {} days",
            card_id,
            quality,
            updated.interval().unwrap_or(0)
        );
        Ok(updated)
    }

    /// Get review statistics as of a day
    pub fn stats(&self, as_of: NaiveDate) -> ReviewStats {
        let mut stats = ReviewStats {
            total_notes: self.notes.len(),
            ..Default::default()
        };

        for card in self.cards() {
            stats.total_cards += 1;
            if !card.is_reviewed() {
                stats.unreviewed_cards += 1;
            }
            if card.is_due(as_of) {
                stats.due_cards += 1;
            }
            if card.mastered {
                stats.mastered_cards += 1;
            }
        }

        stats
    }
}
