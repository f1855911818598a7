//! TUI rendering — header, the active screen, and the status bar.

pub mod adjust;
pub mod calendar;
pub mod home;

use agua_core::{present, record::StatusValue};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(f.area());

  draw_header(f, rows[0], app);
  match app.screen {
    Screen::Home => home::draw(f, rows[1], app),
    Screen::Calendar => calendar::draw(f, rows[1], app),
    Screen::Adjust => adjust::draw(f, rows[1], app),
  }
  draw_status(f, rows[2], app);
}

/// Foreground colour used for a status everywhere in the UI.
pub fn status_color(status: Option<StatusValue>) -> Color {
  match status {
    Some(StatusValue::Present) => Color::Cyan,
    Some(StatusValue::Absent) => Color::Red,
    Some(StatusValue::Paused) => Color::Yellow,
    None => Color::DarkGray,
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let left = Span::styled(
    " água hoje",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{} ", present::readable_date(app.today)),
    Style::default().fg(Color::Gray),
  );

  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen {
    Screen::Home => ("HOJE", "c calendário  a ajustar  r recarregar  q sair"),
    Screen::Calendar => ("CALENDÁRIO", "←→/hl mês  t mês atual  a ajustar  Esc voltar  q sair"),
    Screen::Adjust => ("AJUSTAR", "↑↓/jk escolher  Enter salvar  s/n/p atalhos  Esc voltar"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span]))
      .style(Style::default().bg(Color::Black)),
    area,
  );
}
