use chrono::NaiveDate;

use engilife_lib::flashcards::algorithm::format_interval;
use engilife_lib::flashcards::Flashcard;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap text in a color when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Short id for listings
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// One-line schedule summary for a card
pub fn schedule_label(card: &Flashcard, as_of: NaiveDate, use_color: bool) -> String {
    let label = match (card.due_date(), card.interval()) {
        (Some(due), Some(interval)) => {
            let overdue = (as_of - due).num_days();
            let when = match overdue {
                d if d > 0 => paint(&format!("overdue {}d", d), Color::RED, use_color),
                0 => paint("due", Color::YELLOW, use_color),
                d => paint(&format!("in {}d", -d), Color::GRAY, use_color),
            };
            format!("{} (every {}, {} reviews)", when, format_interval(interval), card.reviews())
        }
        _ => paint("new", Color::CYAN, use_color),
    };

    if card.mastered {
        format!("{} {}", label, paint("[mastered]", Color::GREEN, use_color))
    } else {
        label
    }
}
