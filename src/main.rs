//! Debbynote - Markdown notes for competitive debate.
//!
//! # Usage
//!
//! ```bash
//! debbynote list
//! debbynote new round1
//! debbynote show round1.md --output round1.html --watch
//! debbynote format round1.md --op bold --start 0 --end 5
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use debbynote::app::{App, Message, Model, NoticeLevel};
use debbynote::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use debbynote::editor::{FormatOp, Selection};
use debbynote::storage::{DestinationPicker, FsNoteStore, NoteStore};
use debbynote::ui::NoteStats;

/// Poll interval for `show --watch`.
const WATCH_POLL: Duration = Duration::from_millis(250);

/// Markdown notes for competitive debate
#[derive(Parser, Debug)]
#[command(name = "debbynote", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Notes directory (default: ~/debbynotes)
    #[arg(long, global = true, value_name = "DIR")]
    notes_dir: Option<PathBuf>,

    /// Preview color scheme
    #[arg(long, global = true, value_enum)]
    theme: Option<ThemeMode>,

    /// Hide the notes sidebar on preview pages
    #[arg(long, global = true)]
    no_sidebar: bool,

    /// Hide the word count line on preview pages
    #[arg(long, global = true)]
    no_status: bool,

    /// Log debug events (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults
    #[arg(long, global = true)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List notes
    List {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Render a note as an HTML preview page
    Show {
        #[arg(value_name = "NOTE")]
        note: String,
        /// Write the page here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Re-render whenever the note changes
        #[arg(short, long)]
        watch: bool,
    },
    /// Create an empty note
    New {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Print word and character counts
    Stats {
        #[arg(value_name = "NOTE")]
        note: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a toolbar operation to a note and save it
    Format {
        #[arg(value_name = "NOTE")]
        note: String,
        #[arg(long, value_enum)]
        op: FormatOp,
        /// Selection start (characters)
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Selection end (characters); defaults to `start`
        #[arg(long)]
        end: Option<usize>,
        /// Save the result under a new name (prompts for it)
        #[arg(long)]
        save_as: bool,
    },
}

impl Cli {
    /// The flags that can be saved as defaults.
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            watch: matches!(self.command, Command::Show { watch: true, .. }),
            no_sidebar: self.no_sidebar,
            no_status: self.no_status,
            theme: self.theme,
            notes_dir: self.notes_dir.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

/// Asks for a note name on the terminal. Empty input takes the suggestion.
struct PromptPicker;

impl DestinationPicker for PromptPicker {
    fn choose(&mut self, suggested: &str) -> Option<String> {
        eprint!("Save as [{suggested}]: ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let name = line.trim();
                Some(if name.is_empty() { suggested } else { name }.to_string())
            }
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            subscriber
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => subscriber.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn write_page(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Fail if the last storage action reported an error.
fn check_notice(model: &Model) -> Result<()> {
    match model.notice() {
        Some(notice) if notice.level == NoticeLevel::Error => {
            anyhow::bail!("{}", notice.message)
        }
        Some(notice) => {
            eprintln!("{}", notice.message);
            Ok(())
        }
        None => Ok(()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(cli.verbose, effective.log_file.as_deref())?;
    tracing::debug!(?effective, "resolved flags");

    let store = effective
        .notes_dir
        .clone()
        .map_or_else(FsNoteStore::at_default_location, FsNoteStore::new);
    let mut app = App::new(store)
        .with_picker(Box::new(PromptPicker))
        .with_theme(effective.theme.unwrap_or(ThemeMode::Auto))
        .with_sidebar(!effective.no_sidebar)
        .with_status_line(!effective.no_status);

    match cli.command {
        Command::List { json } => {
            let notes = app.store().list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                for note in notes {
                    println!("{note}");
                }
            }
        }
        Command::Show { note, output, .. } => {
            let model = app.open(&note);
            check_notice(&model)?;
            if effective.watch {
                app.watch(model, WATCH_POLL, |html| write_page(output.as_deref(), html))
                    .context("Watch failed")?;
            } else {
                write_page(output.as_deref(), &app.render_page(&model))?;
            }
        }
        Command::New { name } => {
            let name = app.store().create(&name, "")?;
            println!("{name}");
        }
        Command::Stats { note, json } => {
            let stats = NoteStats::from_text(&app.store().read(&note)?);
            if json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("{stats}");
            }
        }
        Command::Format {
            note,
            op,
            start,
            end,
            save_as,
        } => {
            let model = app.open(&note);
            check_notice(&model)?;
            let selection = Selection::new(start, end.unwrap_or(start));
            let model = app.dispatch(model, Message::SetSelection(selection));
            let model = app.dispatch(model, Message::Format(op));
            let save = if save_as { Message::SaveAs } else { Message::Save };
            let model = app.dispatch(model, save);
            check_notice(&model)?;
        }
    }
    Ok(())
}
