//! Adjust screen — record today's status, with recent history beside it.

use agua_core::{present, record::StatusValue};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::status_color;
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
    .split(area);

  draw_options(f, cols[0], app);
  draw_history(f, cols[1], app);
}

fn draw_options(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" Como está hoje? ({}) ", present::short_date(app.today)))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = App::adjust_options()
    .into_iter()
    .map(|status| {
      let key = match status {
        StatusValue::Present => "s",
        StatusValue::Absent => "n",
        StatusValue::Paused => "p",
      };
      ListItem::new(Line::from(vec![
        Span::styled(format!("[{key}] "), Style::default().fg(Color::DarkGray)),
        Span::styled(
          present::message(status),
          Style::default().fg(status_color(Some(status))),
        ),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.adjust_cursor));

  f.render_stateful_widget(
    List::new(items)
      .block(block)
      .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
      .highlight_symbol("› "),
    area,
    &mut state,
  );
}

fn draw_history(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Últimos ajustes ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = if app.history.is_empty() {
    vec![Line::from(Span::styled(
      "Nenhum ajuste registrado ainda",
      Style::default().fg(Color::DarkGray),
    ))]
  } else {
    app
      .history
      .iter()
      .map(|r| {
        Line::from(vec![
          Span::raw(format!("{}  ", present::short_date(r.date))),
          Span::styled(
            present::short_label(r.status),
            Style::default().fg(status_color(Some(r.status))),
          ),
        ])
      })
      .collect()
  };

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "Pelo ciclo, próxima água:",
    Style::default().add_modifier(Modifier::BOLD),
  )));
  lines.push(Line::from(present::next_supply_text(app.next_change)));

  f.render_widget(Paragraph::new(lines), inner);
}
