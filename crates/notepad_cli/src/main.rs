//! Developer CLI over `notepad_core`.
//!
//! # Responsibility
//! - Drive every note-store and display-preference operation against a
//!   SQLite file for local checks.
//! - Keep output plain and line-oriented.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use notepad_core::db::open_db;
use notepad_core::{
    core_version, default_log_level, init_logging, DisplayPreference, KeyValueStore, Note, NoteId,
    NoteStore, SqliteKvStore,
};

#[derive(Parser)]
#[command(name = "notepad")]
#[command(about = "Notepad: local note list with drag-to-end reordering")]
#[command(version)]
struct Cli {
    /// SQLite file holding notes and the display preference.
    #[arg(long, env = "NOTEPAD_DB", default_value = "notepad.db")]
    db: PathBuf,
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "NOTEPAD_LOG_DIR")]
    log_dir: Option<String>,
    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "NOTEPAD_LOG_LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes in display order.
    List,
    /// Create a note. Blank text is ignored.
    Add { text: String },
    /// Replace the text of a note.
    Edit { id: NoteId, text: String },
    /// Delete a note.
    Delete { id: NoteId },
    /// Move a note to the end, or to `--to` when given.
    Move {
        id: NoteId,
        #[arg(long)]
        to: Option<usize>,
    },
    /// Show notes whose text contains QUERY, ignoring case.
    Search { query: String },
    /// Show the display mode, or flip it with `toggle`.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    Toggle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(message) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let conn = open_db(&cli.db)?;
    let kv = SqliteKvStore::new(&conn);
    let mut out = io::stdout().lock();

    match &cli.command {
        Some(command) => run_command(&kv, command, &mut out),
        None => {
            writeln!(out, "notepad_core version={}", core_version())?;
            writeln!(out, "db={}", cli.db.display())?;
            Ok(())
        }
    }
}

fn run_command<S: KeyValueStore>(
    kv: S,
    command: &Commands,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Theme { action } => {
            let mut pref = DisplayPreference::load(kv)?;
            if action.is_some() {
                pref.toggle()?;
            }
            writeln!(out, "{}", if pref.is_dark() { "dark" } else { "light" })?;
        }
        Commands::List => write_notes(out, NoteStore::open(kv)?.notes())?,
        Commands::Search { query } => {
            let notes = NoteStore::open(kv)?;
            for note in notes.search(query) {
                write_note(out, note)?;
            }
        }
        Commands::Add { text } => {
            let mut notes = NoteStore::open(kv)?;
            match notes.add(text.as_str())? {
                Some(note) => write_note(out, &note)?,
                None => writeln!(out, "skipped: note not created")?,
            }
        }
        Commands::Edit { id, text } => {
            let mut notes = NoteStore::open(kv)?;
            notes.update(*id, text.as_str())?;
            write_notes(out, notes.notes())?;
        }
        Commands::Delete { id } => {
            let mut notes = NoteStore::open(kv)?;
            notes.delete(*id)?;
            write_notes(out, notes.notes())?;
        }
        Commands::Move { id, to } => {
            let mut notes = NoteStore::open(kv)?;
            match to {
                Some(index) => notes.reorder_to(*id, *index)?,
                None => notes.reorder(*id)?,
            }
            write_notes(out, notes.notes())?;
        }
    }
    Ok(())
}

fn write_notes(out: &mut dyn Write, notes: &[Note]) -> io::Result<()> {
    notes.iter().try_for_each(|note| write_note(out, note))
}

fn write_note(out: &mut dyn Write, note: &Note) -> io::Result<()> {
    writeln!(out, "{}\t{}", note.id, note.text)
}

#[cfg(test)]
mod tests {
    use super::{run_command, Cli};
    use clap::Parser;
    use notepad_core::db::open_db_in_memory;
    use notepad_core::SqliteKvStore;

    fn exec(kv: &SqliteKvStore<'_>, args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("notepad").chain(args.iter().copied()))
            .unwrap();
        let command = cli.command.expect("test args include a subcommand");
        let mut out = Vec::new();
        run_command(kv, &command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_list_and_search_print_id_and_text() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvStore::new(&conn);

        assert_eq!(exec(&kv, &["add", "Buy Milk"]), "1\tBuy Milk\n");
        assert_eq!(exec(&kv, &["add", "Walk dog"]), "2\tWalk dog\n");
        assert_eq!(exec(&kv, &["add", "   "]), "skipped: note not created\n");

        assert_eq!(exec(&kv, &["list"]), "1\tBuy Milk\n2\tWalk dog\n");
        assert_eq!(exec(&kv, &["search", "MILK"]), "1\tBuy Milk\n");
    }

    #[test]
    fn move_defaults_to_end_and_honours_to_index() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvStore::new(&conn);
        for text in ["a", "b", "c"] {
            exec(&kv, &["add", text]);
        }

        assert_eq!(exec(&kv, &["move", "1"]), "2\tb\n3\tc\n1\ta\n");
        assert_eq!(exec(&kv, &["move", "1", "--to", "0"]), "1\ta\n2\tb\n3\tc\n");
        assert_eq!(exec(&kv, &["list"]), "1\ta\n2\tb\n3\tc\n");
    }

    #[test]
    fn edit_and_delete_rewrite_the_list() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvStore::new(&conn);
        exec(&kv, &["add", "a"]);
        exec(&kv, &["add", "b"]);

        assert_eq!(exec(&kv, &["edit", "2", "B"]), "1\ta\n2\tB\n");
        assert_eq!(exec(&kv, &["delete", "1"]), "2\tB\n");
        assert_eq!(exec(&kv, &["delete", "9"]), "2\tB\n");
    }

    #[test]
    fn theme_shows_and_toggles_persisted_mode() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvStore::new(&conn);

        assert_eq!(exec(&kv, &["theme"]), "light\n");
        assert_eq!(exec(&kv, &["theme", "toggle"]), "dark\n");
        assert_eq!(exec(&kv, &["theme"]), "dark\n");
        assert_eq!(exec(&kv, &["theme", "toggle"]), "light\n");
    }
}
