use std::path::Path;

use anyhow::{bail, Context, Result};

use engilife_lib::config::Config;
use engilife_lib::flashcards::{CardRepository, Flashcard};
use engilife_lib::notes::Note;
use engilife_lib::storage::FileStore;

/// Shared application state for CLI commands
pub struct App {
    pub repo: CardRepository<FileStore>,
}

impl App {
    /// Initialize from config, optionally overriding the data directory
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let config = Config::load().context("Failed to load config")?;

        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => config.data_dir().context("Failed to get data directory")?,
        };

        let store = FileStore::new(data_dir);
        let repo = CardRepository::load(store, config.scheduler)
            .context("Failed to load notes")?;

        Ok(Self { repo })
    }

    /// Find a note by id or title (case-insensitive prefix match)
    pub fn find_note(&self, query: &str) -> Result<Note> {
        let notes = self.repo.notes();
        let query_lower = query.to_lowercase();

        // Exact match first
        if let Some(note) = notes
            .iter()
            .find(|n| n.id == query || n.title.to_lowercase() == query_lower)
        {
            return Ok(note.clone());
        }

        // Prefix match
        let matches: Vec<&Note> = notes
            .iter()
            .filter(|n| n.id.starts_with(query) || n.title.to_lowercase().starts_with(&query_lower))
            .collect();

        match matches.len() {
            0 => bail!("No note matching '{}'. Available notes:\n{}", query,
                notes.iter().map(|n| format!("  - {}", n.title)).collect::<Vec<_>>().join("\n")),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous note '{}'. Matches:\n{}", query,
                matches.iter().map(|n| format!("  - {} ({})", n.title, n.id)).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Find a card by id (prefix match)
    pub fn find_card(&self, query: &str) -> Result<Flashcard> {
        if let Ok(card) = self.repo.get(query) {
            return Ok(card.clone());
        }

        let matches: Vec<&Flashcard> = self.repo.cards().filter(|c| c.id.starts_with(query)).collect();

        match matches.len() {
            0 => bail!("No card with id '{}'", query),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous card id '{}'. Matches:\n{}", query,
                matches.iter().map(|c| format!("  - {} {}", c.id, c.question)).collect::<Vec<_>>().join("\n")),
        }
    }
}
