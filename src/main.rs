//! Folio - a terminal UI for a project portfolio and its commit history
//!
//! Binary entry point for the TUI application.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio::app::{App, Options};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Terminal UI for browsing a project portfolio and its commit history"
)]
struct Cli {
    /// Commit log CSV (one row per changed source line)
    #[arg(long, default_value = "loc.csv")]
    log: PathBuf,

    /// Project records JSON
    #[arg(long, default_value = "projects.json")]
    projects: PathBuf,

    /// GitHub username for the profile widget
    #[arg(long)]
    github: Option<String>,

    /// Repository URL used to build commit links
    #[arg(long)]
    repo_url: Option<String>,

    /// Heading level for project cards (1-6)
    #[arg(long, default_value_t = 2)]
    heading_level: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let options = Options {
        log_path: cli.log,
        projects_path: cli.projects,
        github_user: cli.github,
        repo_url: cli.repo_url,
        heading_level: cli.heading_level,
    };

    let terminal = ratatui::init();
    // Hover and drag-select need mouse reporting, which ratatui::init leaves off.
    let _ = execute!(io::stdout(), EnableMouseCapture);
    let result = run(terminal, &options);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, options: &Options) -> color_eyre::Result<()> {
    let mut app = App::new(options);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout to support idle processing
/// (expiring notifications when no input arrives).
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Mouse(mouse) => {
                app.on_mouse_event(mouse);
            }
            _ => {}
        }
    } else {
        app.on_idle();
    }
    Ok(())
}

/// Set up tracing to a log file so the alternate screen stays clean.
///
/// Filtered via `FOLIO_LOG` (same syntax as `RUST_LOG`), default `folio=info`.
fn init_tracing() {
    let Some(dir) = dirs::data_local_dir() else {
        return;
    };
    let dir = dir.join("folio");
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = fs::File::options()
        .create(true)
        .append(true)
        .open(dir.join("folio.log"))
    else {
        return;
    };

    let filter =
        EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("folio=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();
}
