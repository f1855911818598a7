//! Home screen — today's status, big and centred.

use agua_core::present;
use ratatui::{
  Frame,
  layout::{Alignment, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use super::status_color;
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Hoje ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(view) = &app.home else {
    f.render_widget(
      Paragraph::new("Carregando…")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let color = status_color(Some(view.status));
  let origin = if view.confirmed { "confirmado" } else { "previsto pelo ciclo" };

  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      present::headline(view.status),
      Style::default().fg(color).add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(view.message.clone(), Style::default().fg(color))),
    Line::from(Span::styled(origin, Style::default().fg(Color::DarkGray))),
    Line::from(""),
    Line::from(present::readable_date(view.today)),
  ];

  if view.shows_next_supply() {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      "Próximo fornecimento:",
      Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(view.next_text.clone()));
  }

  f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
