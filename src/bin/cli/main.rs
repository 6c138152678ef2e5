mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "engilife-cli", about = "EngiLife notes and flashcard review", version)]
struct Cli {
    /// Use a specific data directory (default: from config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List notes with their card counts
    Notes,

    /// Create or delete notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Add or remove flashcards
    #[command(subcommand)]
    Card(CardCommand),

    /// List cards due for review
    Due {
        /// Day to check against (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record a review for a card
    Review {
        /// Card id (prefix match)
        card: String,
        /// forgot, hard, good, easy (or 1-4)
        quality: String,
        /// Day of the review (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the interval each rating would give a card
    Preview {
        /// Card id (prefix match)
        card: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show review statistics
    Stats {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum NoteCommand {
    /// Create a new note
    New {
        /// Note title
        title: String,
        /// Content text (use "-" to read from stdin)
        #[arg(long)]
        content: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete a note and its flashcards
    Delete {
        /// Note id or title (case-insensitive prefix match)
        note: String,
    },
}

#[derive(Subcommand)]
enum CardCommand {
    /// Add a flashcard to a note
    Add {
        /// Note id or title (case-insensitive prefix match)
        note: String,
        question: String,
        answer: String,
    },

    /// Remove a flashcard
    Remove {
        /// Card id (prefix match)
        card: String,
    },
}

/// Resolve "-" as stdin
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf)
        }
        _ => content,
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let mut app = app::App::new(cli.data_dir.as_deref())?;

    match cli.command {
        Command::Notes => {
            commands::notes::run_list(&app, &cli.format, use_color)?;
        }
        Command::Note(NoteCommand::New { title, content, tags }) => {
            let content = resolve_content(content);
            commands::notes::run_new(&mut app, title, content, tags.as_deref(), &cli.format)?;
        }
        Command::Note(NoteCommand::Delete { note }) => {
            commands::notes::run_delete(&mut app, &note, &cli.format)?;
        }
        Command::Card(CardCommand::Add { note, question, answer }) => {
            commands::card::run_add(&mut app, &note, question, answer, &cli.format)?;
        }
        Command::Card(CardCommand::Remove { card }) => {
            commands::card::run_remove(&mut app, &card, &cli.format)?;
        }
        Command::Due { date } => {
            commands::due::run(&app, date.unwrap_or_else(today), &cli.format, use_color)?;
        }
        Command::Review { card, quality, date } => {
            commands::review::run(
                &mut app,
                &card,
                &quality,
                date.unwrap_or_else(today),
                &cli.format,
                use_color,
            )?;
        }
        Command::Preview { card, date } => {
            commands::review::run_preview(&app, &card, date.unwrap_or_else(today), &cli.format)?;
        }
        Command::Stats { date } => {
            commands::stats::run(&app, date.unwrap_or_else(today), &cli.format)?;
        }
    }

    Ok(())
}
