use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run_add(
    app: &mut App,
    note_query: &str,
    question: String,
    answer: String,
    format: &OutputFormat,
) -> Result<()> {
    let note = app.find_note(note_query)?;
    let card = app.repo.add_flashcard(&note.id, question, answer)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&card)?),
        OutputFormat::Plain => println!("Added card {} to \"{}\"", card.id, note.title),
    }

    Ok(())
}

pub fn run_remove(app: &mut App, card_query: &str, format: &OutputFormat) -> Result<()> {
    let card = app.find_card(card_query)?;
    let removed = app.repo.remove_flashcard(&card.id)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&removed)?),
        OutputFormat::Plain => println!("Removed card \"{}\"", removed.question),
    }

    Ok(())
}
