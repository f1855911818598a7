//! Application state machine and event dispatcher.

use agua_core::{
  date::{self, DateKey, YearMonth},
  present::{self, HomeView},
  record::{Record, StatusValue},
  schedule::{DEFAULT_HISTORY_LIMIT, MonthView, Schedule},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::IntoEnumIterator;

use crate::backend::Backend;

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Today's status and the next supply date.
  Home,
  /// One month of confirmed and inferred days.
  Calendar,
  /// Record today's status by hand; shows recent records.
  Adjust,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen: Screen,

  /// The local date as of the last reload.
  pub today: DateKey,

  pub home: Option<HomeView>,

  /// Month shown by the calendar screen.
  pub month: YearMonth,

  pub month_view: Option<MonthView>,

  /// Most recent confirmed records, newest first.
  pub history: Vec<Record>,

  /// Next supply date according to the latest record.
  pub next_change: Option<DateKey>,

  /// Highlighted option on the adjust screen.
  pub adjust_cursor: usize,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pub schedule: Schedule<Backend>,
}

impl App {
  pub fn new(schedule: Schedule<Backend>) -> Self {
    let today = date::today();
    Self {
      screen: Screen::Home,
      today,
      home: None,
      month: YearMonth::containing(today),
      month_view: None,
      history: Vec::new(),
      next_change: None,
      adjust_cursor: 0,
      status_msg: String::new(),
      schedule,
    }
  }

  /// The statuses offered on the adjust screen, in display order.
  pub fn adjust_options() -> Vec<StatusValue> { StatusValue::iter().collect() }

  // ── Data loading ──────────────────────────────────────────────────────────

  pub async fn load_home(&mut self) {
    self.today = date::today();
    self.status_msg = "Carregando…".into();
    self.home = Some(self.schedule.home(self.today).await);
    self.status_msg.clear();
  }

  pub async fn load_month(&mut self) {
    self.status_msg = "Carregando calendário…".into();
    self.month_view = Some(self.schedule.month(self.month).await);
    self.status_msg.clear();
  }

  pub async fn load_adjust(&mut self) {
    self.today = date::today();
    self.history = self.schedule.history(DEFAULT_HISTORY_LIMIT).await;
    self.next_change = self.schedule.next_change(self.today).await;
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.screen {
      Screen::Home => self.handle_home_key(key).await,
      Screen::Calendar => self.handle_calendar_key(key).await,
      Screen::Adjust => self.handle_adjust_key(key).await,
    }
  }

  async fn handle_home_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Char('c') => self.open_calendar().await,
      KeyCode::Char('a') => self.open_adjust().await,
      KeyCode::Char('r') => self.load_home().await,
      _ => {}
    }
    true
  }

  async fn handle_calendar_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Esc | KeyCode::Backspace => self.screen = Screen::Home,
      KeyCode::Left | KeyCode::Char('h') => {
        self.month = self.month.prev();
        self.load_month().await;
      }
      KeyCode::Right | KeyCode::Char('l') => {
        self.month = self.month.next();
        self.load_month().await;
      }
      KeyCode::Char('t') => {
        self.month = YearMonth::containing(date::today());
        self.load_month().await;
      }
      KeyCode::Char('a') => self.open_adjust().await,
      _ => {}
    }
    true
  }

  async fn handle_adjust_key(&mut self, key: KeyEvent) -> bool {
    let options = Self::adjust_options();
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Esc | KeyCode::Backspace => self.screen = Screen::Home,
      KeyCode::Down | KeyCode::Char('j') => {
        if self.adjust_cursor + 1 < options.len() {
          self.adjust_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.adjust_cursor = self.adjust_cursor.saturating_sub(1);
      }
      KeyCode::Enter => {
        if let Some(status) = options.get(self.adjust_cursor).copied() {
          self.save_today(status).await;
        }
      }
      KeyCode::Char('s') => self.save_today(StatusValue::Present).await,
      KeyCode::Char('n') => self.save_today(StatusValue::Absent).await,
      KeyCode::Char('p') => self.save_today(StatusValue::Paused).await,
      _ => {}
    }
    true
  }

  // ── Transitions ───────────────────────────────────────────────────────────

  async fn open_calendar(&mut self) {
    self.screen = Screen::Calendar;
    self.load_month().await;
  }

  async fn open_adjust(&mut self) {
    self.screen = Screen::Adjust;
    self.adjust_cursor = 0;
    self.load_adjust().await;
  }

  /// Record today's status; on success return to the refreshed home screen.
  async fn save_today(&mut self, status: StatusValue) {
    self.today = date::today();
    self.status_msg = "Salvando…".into();
    match self.schedule.record_today(status, self.today).await {
      Ok(_) => {
        self.load_home().await;
        self.load_adjust().await;
        self.month_view = None;
        self.screen = Screen::Home;
        self.status_msg = present::confirmation(status).to_owned();
      }
      Err(e) => {
        tracing::error!("saving today's status failed: {e}");
        self.status_msg = "Erro ao salvar. Tente novamente.".into();
      }
    }
  }
}
