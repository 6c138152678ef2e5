use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flashcards::Flashcard;

/// A study note owning an ordered list of flashcards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            last_modified: Utc::now(),
            tags: BTreeSet::new(),
            flashcards: Vec::new(),
        }
    }

    pub fn with_tags<I: IntoIterator<Item = String>>(mut self, tags: I) -> Self {
        self.tags = normalize_tags(tags);
        self
    }

    /// Mark the note as modified now
    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}

/// Partial update for a note; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Trim tags, drop a leading '#', and skip blanks
pub fn normalize_tags<I: IntoIterator<Item = String>>(tags: I) -> BTreeSet<String> {
    tags.into_iter()
        .map(|t| t.trim().trim_start_matches('#').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_a_set() {
        let note = Note::new("Circuits".to_string(), String::new()).with_tags(vec![
            "#exam".to_string(),
            " physics ".to_string(),
            "exam".to_string(),
            "  ".to_string(),
        ]);

        let tags: Vec<&str> = note.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["exam", "physics"]);
    }

    #[test]
    fn test_decode_without_flashcards() {
        let json = r#"{"id":"n1","title":"T","content":"c","lastModified":"2026-10-19T08:00:00Z","tags":["a"]}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(note.flashcards.is_empty());
        assert!(note.tags.contains("a"));
    }
}
