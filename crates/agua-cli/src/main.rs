//! `agua` — household water-supply schedule in the terminal.
//!
//! # Usage
//!
//! ```
//! agua --url https://<project>.supabase.co --key <anon-key>
//! agua --db ~/.local/share/agua/agua.db status
//! agua --config ~/.config/agua/config.toml calendar --year 2025 --month 1
//! ```

mod app;
mod backend;
mod commands;
mod config;
mod ui;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use agua_core::{
  date::{self, YearMonth},
  record::StatusValue,
  schedule::{DEFAULT_HISTORY_LIMIT, Schedule},
};
use anyhow::{Context, Result};
use app::App;
use backend::Backend;
use clap::{Parser, Subcommand};
use config::{ConfigFile, Settings};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "agua", version, about = "Household water-supply schedule")]
struct Args {
  /// Path to a TOML config file (url, key, table, db, log_file).
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Hosted store URL.
  #[arg(long, env = "AGUA_URL", global = true)]
  url: Option<String>,

  /// Hosted store API key.
  #[arg(long, env = "AGUA_KEY", hide_env_values = true, global = true)]
  key: Option<String>,

  /// Table holding the daily records (default: ciclo_agua).
  #[arg(long, env = "AGUA_TABLE", global = true)]
  table: Option<String>,

  /// Use a local SQLite file instead of the hosted store.
  #[arg(long, env = "AGUA_DB", value_name = "FILE", global = true)]
  db: Option<PathBuf>,

  /// Append logs to this file.
  #[arg(long, value_name = "FILE", global = true)]
  log_file: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print today's status and the next supply date.
  Status,
  /// Print a month as a grid (default: the current month).
  Calendar {
    #[arg(long, requires = "month", value_parser = clap::value_parser!(i32).range(0..=9999))]
    year:  Option<i32>,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
  },
  /// Record today's status: SIM, NAO or PAUSA.
  Set {
    #[arg(value_parser = parse_status)]
    status: StatusValue,
  },
  /// Print the most recent records.
  History {
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    limit: usize,
  },
  /// Write yesterday, today and tomorrow into an empty store.
  Seed,
}

fn parse_status(s: &str) -> Result<StatusValue, String> {
  StatusValue::parse(&s.trim().to_ascii_uppercase()).map_err(|e| e.to_string())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let flags = ConfigFile {
    url:      args.url,
    key:      args.key,
    table:    args.table,
    db:       args.db,
    log_file: args.log_file,
  };
  // CLI flags override config file, which overrides defaults.
  let settings = Settings::resolve(flags.over(file_cfg))?;

  init_tracing(settings.log_file.as_deref(), args.command.is_none())?;

  let schedule = Schedule::new(Backend::connect(settings.backend).await?);
  let today = date::today();

  match args.command {
    None => run_tui(schedule).await,
    Some(Command::Status) => commands::status(&schedule, today).await,
    Some(Command::Calendar { year, month }) => {
      let month = match month {
        Some(m) => YearMonth::new(year.unwrap_or_else(|| today.year()), m)?,
        None => YearMonth::containing(today),
      };
      commands::calendar(&schedule, month, today).await
    }
    Some(Command::Set { status }) => commands::set(&schedule, status, today).await,
    Some(Command::History { limit }) => commands::history(&schedule, limit).await,
    Some(Command::Seed) => commands::seed(&schedule, today).await,
  }
}

/// Subcommands log to stderr. The TUI owns the terminal, so it logs only
/// when a log file is configured.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::WARN.into())
    .from_env_lossy();

  match log_file {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    }
    None if !interactive => {
      tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    }
    None => {}
  }
  Ok(())
}

// ─── TUI ──────────────────────────────────────────────────────────────────────

async fn run_tui(schedule: Schedule<Backend>) -> Result<()> {
  let mut app = App::new(schedule);

  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  app.load_home().await;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key).await
    {
      break;
    }
  }

  Ok(())
}
