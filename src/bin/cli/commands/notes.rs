use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, short_id, Color};
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let notes = app.repo.notes();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = notes.iter().map(|note| {
                serde_json::json!({
                    "id": note.id,
                    "title": note.title,
                    "tags": note.tags,
                    "cardCount": note.flashcards.len(),
                    "lastModified": note.last_modified.to_rfc3339(),
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if notes.is_empty() {
                println!("No notes yet. Create one with `note new <title>`.");
                return Ok(());
            }

            for note in notes {
                let tags = note.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ");
                println!(
                    "{} {} ({} cards) {}",
                    paint(short_id(&note.id), Color::GRAY, use_color),
                    paint(&note.title, Color::BOLD, use_color),
                    note.flashcards.len(),
                    tags
                );
            }

            println!("\n{} notes total", notes.len());
        }
    }

    Ok(())
}

pub fn run_new(
    app: &mut App,
    title: String,
    content: Option<String>,
    tags: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let tags: Vec<String> = tags
        .map(|t| t.split(',').map(|s| s.to_string()).collect())
        .unwrap_or_default();

    let note = app.repo.create_note(title, content.unwrap_or_default(), tags)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&note)?),
        OutputFormat::Plain => println!("Created note \"{}\" ({})", note.title, note.id),
    }

    Ok(())
}

pub fn run_delete(app: &mut App, query: &str, format: &OutputFormat) -> Result<()> {
    let note = app.find_note(query)?;
    let removed = app.repo.delete_note(&note.id)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({
            "id": removed.id,
            "deletedCards": removed.flashcards.len(),
        })),
        OutputFormat::Plain => println!(
            "Deleted note \"{}\" and {} flashcards",
            removed.title,
            removed.flashcards.len()
        ),
    }

    Ok(())
}
