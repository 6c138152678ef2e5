use anyhow::Result;
use chrono::NaiveDate;

use crate::app::App;
use crate::render::terminal::{paint, schedule_label, short_id, Color};
use crate::OutputFormat;

pub fn run(app: &App, as_of: NaiveDate, format: &OutputFormat, use_color: bool) -> Result<()> {
    let due = app.repo.get_due(as_of);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&due)?);
        }
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("Nothing due on {}.", as_of);
                return Ok(());
            }

            for card in &due {
                let note_title = app
                    .repo
                    .owner_of(&card.id)
                    .map(|n| n.title.as_str())
                    .unwrap_or("?");
                println!(
                    "{} {}  {}",
                    paint(short_id(&card.id), Color::GRAY, use_color),
                    card.question,
                    schedule_label(card, as_of, use_color)
                );
                println!("         {}", paint(note_title, Color::GRAY, use_color));
            }

            println!("\n{} cards due on {}", due.len(), as_of);
        }
    }

    Ok(())
}
