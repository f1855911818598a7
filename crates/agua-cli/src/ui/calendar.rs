//! Calendar screen — a Sunday-first month grid.

use agua_core::{
  cycle::DayEntry,
  present::{self, WEEKDAY_HEADERS},
  record::StatusValue,
};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use super::status_color;
use crate::app::App;

/// Terminal columns per day cell.
const CELL: usize = 6;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let title = format!(
    " {} {} ",
    present::month_name(app.month.month()),
    app.month.year()
  );
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(view) = app.month_view.as_ref().filter(|v| v.month == app.month) else {
    f.render_widget(
      Paragraph::new("Carregando calendário…").style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let mut lines = vec![Line::from(
    WEEKDAY_HEADERS
      .iter()
      .map(|h| {
        Span::styled(
          format!("{h:<CELL$}"),
          Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )
      })
      .collect::<Vec<_>>(),
  )];

  let blanks = view.month.leading_blanks() as usize;
  let mut week: Vec<Span> = vec![Span::raw(" ".repeat(blanks * CELL))];
  for (i, entry) in view.days.iter().enumerate() {
    week.push(day_cell(entry, app));
    if (blanks + i + 1) % 7 == 0 {
      lines.push(Line::from(std::mem::take(&mut week)));
      lines.push(Line::from(""));
    }
  }
  if !week.is_empty() {
    lines.push(Line::from(week));
  }

  lines.push(Line::from(""));
  lines.push(legend());

  f.render_widget(Paragraph::new(lines), inner);
}

fn day_cell<'a>(entry: &DayEntry, app: &App) -> Span<'a> {
  let mut style = Style::default().fg(status_color(entry.status));
  if entry.confirmed {
    style = style.add_modifier(Modifier::BOLD);
  } else {
    style = style.add_modifier(Modifier::DIM);
  }
  if entry.date == app.today {
    style = style.add_modifier(Modifier::REVERSED);
  }
  Span::styled(
    format!("{:>2} {}  ", entry.day, present::symbol(entry.status)),
    style,
  )
}

fn legend<'a>() -> Line<'a> {
  let item = |status: Option<StatusValue>, text: &'a str| {
    vec![
      Span::styled(present::symbol(status), Style::default().fg(status_color(status))),
      Span::raw(format!(" {text}   ")),
    ]
  };
  let mut spans = Vec::new();
  spans.extend(item(Some(StatusValue::Present), "tem água"));
  spans.extend(item(Some(StatusValue::Absent), "sem água"));
  spans.extend(item(Some(StatusValue::Paused), "pausa"));
  spans.extend(item(None, "indefinido"));
  spans.push(Span::styled(
    "negrito = confirmado",
    Style::default().add_modifier(Modifier::BOLD),
  ));
  Line::from(spans)
}
