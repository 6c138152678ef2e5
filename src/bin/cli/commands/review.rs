use anyhow::Result;
use chrono::NaiveDate;

use engilife_lib::flashcards::algorithm::{format_interval, preview_intervals};
use engilife_lib::flashcards::Quality;

use crate::app::App;
use crate::render::terminal::{paint, schedule_label, Color};
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    card_query: &str,
    quality: &str,
    today: NaiveDate,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let quality: Quality = quality.parse()?;
    let card = app.find_card(card_query)?;
    let updated = app.repo.review(&card.id, quality, today)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&updated)?),
        OutputFormat::Plain => {
            println!("{}", paint(&updated.question, Color::BOLD, use_color));
            println!("  {}", updated.answer);
            if let Some(due) = updated.due_date() {
                println!(
                    "Next review {} ({})",
                    due,
                    format_interval(updated.interval().unwrap_or(0))
                );
            }
            println!(
                "Ease {:.2}, {}",
                updated.ease_factor,
                schedule_label(&updated, today, use_color)
            );
        }
    }

    Ok(())
}

pub fn run_preview(app: &App, card_query: &str, today: NaiveDate, format: &OutputFormat) -> Result<()> {
    let card = app.find_card(card_query)?;
    let intervals = preview_intervals(&card, today, app.repo.config());

    match format {
        OutputFormat::Json => {
            let output: serde_json::Map<String, serde_json::Value> = Quality::ALL
                .iter()
                .zip(intervals)
                .map(|(q, days)| (q.to_string(), serde_json::json!(days)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", card.question);
            for (quality, days) in Quality::ALL.iter().zip(intervals) {
                println!("  {:<7} {}", quality.as_str(), format_interval(days));
            }
        }
    }

    Ok(())
}
