//! backfill - backdated commit sequence generator
//!
//! Binary entry point: terminal form by default, `console` for prompts.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use backfill::app::App;
use backfill::config::Settings;
use backfill::console::{self, ConsoleArgs};
use backfill::logging;

#[derive(Parser, Debug)]
#[command(name = "backfill", version, about = "Backdated commit sequence generator")]
struct Cli {
    /// Settings file (default: <config dir>/backfill/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the terminal form (default)
    Form,
    /// Prompt on the console and print progress
    Console(ConsoleCommand),
}

#[derive(Args, Debug)]
struct ConsoleCommand {
    /// Repository working tree
    #[arg(long)]
    repo: Option<String>,
    /// Number of commits (prompted when absent)
    #[arg(long)]
    max_commits: Option<String>,
    /// Start date, YYYY-MM-DD (prompted when absent; blank = now)
    #[arg(long)]
    start_date: Option<String>,
    /// End date, YYYY-MM-DD (default: yesterday)
    #[arg(long)]
    end_date: Option<String>,
    /// Minimum step in minutes
    #[arg(long)]
    min_step: Option<String>,
    /// Maximum step in minutes
    #[arg(long)]
    max_step: Option<String>,
    /// Profile URL to check before the run
    #[arg(long)]
    profile_url: Option<String>,
}

impl From<ConsoleCommand> for ConsoleArgs {
    fn from(cmd: ConsoleCommand) -> Self {
        Self {
            repo_path: cmd.repo,
            profile_url: cmd.profile_url,
            max_commits: cmd.max_commits,
            start_date: cmd.start_date,
            end_date: cmd.end_date,
            min_step_minutes: cmd.min_step,
            max_step_minutes: cmd.max_step,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Form) {
        Command::Console(cmd) => {
            logging::init_stderr();
            let report = console::run(&cmd.into(), &settings)?;
            if report.stop.is_error() {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Form => {
            // Diagnostics are optional; the form runs without them
            let _ = logging::init_file(&settings.log_dir);
            let terminal = ratatui::init();
            let result = run(terminal, settings);
            ratatui::restore();
            result
        }
    }
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, settings: Settings) -> color_eyre::Result<()> {
    let mut app = App::new(settings);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
        app.tick();
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with a 100ms timeout so run events are drained promptly
/// even when no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
