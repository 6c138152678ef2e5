use anyhow::Result;
use chrono::NaiveDate;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, as_of: NaiveDate, format: &OutputFormat) -> Result<()> {
    let stats = app.repo.stats(as_of);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Plain => {
            println!("Notes       {}", stats.total_notes);
            println!("Cards       {}", stats.total_cards);
            println!("  new       {}", stats.unreviewed_cards);
            println!("  due       {}", stats.due_cards);
            println!("  mastered  {}", stats.mastered_cards);
        }
    }

    Ok(())
}
