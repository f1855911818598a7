//! One-shot subcommands printing plain text.

use std::fmt::Write as _;

use agua_core::{
  date::{DateKey, YearMonth},
  present::{self, HomeView, WEEKDAY_HEADERS},
  record::{Record, StatusValue},
  schedule::{MonthView, Schedule},
};
use anyhow::{Context, Result};

use crate::backend::Backend;

pub async fn status(schedule: &Schedule<Backend>, today: DateKey) -> Result<()> {
  let view = schedule.home(today).await;
  print!("{}", render_home(&view));
  Ok(())
}

pub async fn calendar(schedule: &Schedule<Backend>, month: YearMonth, today: DateKey) -> Result<()> {
  let view = schedule.month(month).await;
  print!("{}", render_month(&view, today));
  Ok(())
}

pub async fn set(schedule: &Schedule<Backend>, status: StatusValue, today: DateKey) -> Result<()> {
  schedule
    .record_today(status, today)
    .await
    .context("Erro ao salvar. Tente novamente.")?;
  println!("{}", present::confirmation(status));
  Ok(())
}

pub async fn history(schedule: &Schedule<Backend>, limit: usize) -> Result<()> {
  print!("{}", render_history(&schedule.history(limit).await));
  Ok(())
}

pub async fn seed(schedule: &Schedule<Backend>, today: DateKey) -> Result<()> {
  let written = schedule.seed(today).await.context("seeding store")?;
  print!("{}", render_history(&written));
  Ok(())
}

// ─── Rendering ────────────────────────────────────────────────────────────────

pub fn render_home(view: &HomeView) -> String {
  let mut out = String::new();
  let origin = if view.confirmed { "confirmado" } else { "previsto" };
  let _ = writeln!(out, "{}", present::readable_date(view.today));
  let _ = writeln!(out, "{} ({origin})", present::headline(view.status));
  let _ = writeln!(out, "{}", view.message);
  if view.shows_next_supply() {
    let _ = writeln!(out, "Próximo fornecimento: {}", view.next_text);
  }
  out
}

/// Sunday-first grid, one five-column cell per day: day number, glyph, and a
/// `*` on confirmed days or `<` on today.
pub fn render_month(view: &MonthView, today: DateKey) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "{} {}",
    present::month_name(view.month.month()),
    view.month.year()
  );
  for header in WEEKDAY_HEADERS {
    let _ = write!(out, "{header:<5}");
  }
  out.push('\n');

  let blanks = view.month.leading_blanks() as usize;
  out.push_str(&" ".repeat(blanks * 5));

  for (i, entry) in view.days.iter().enumerate() {
    let mark = if entry.date == today {
      "<"
    } else if entry.confirmed {
      "*"
    } else {
      " "
    };
    let _ = write!(out, "{:>2}{}{} ", entry.day, present::symbol(entry.status), mark);
    if (blanks + i + 1) % 7 == 0 {
      out.push('\n');
    }
  }
  if !out.ends_with('\n') {
    out.push('\n');
  }
  let _ = writeln!(out, "~ tem água   x sem água   ‖ pausa   · indefinido   * confirmado");
  out
}

pub fn render_history(records: &[Record]) -> String {
  if records.is_empty() {
    return "Nenhum ajuste registrado ainda\n".to_owned();
  }
  records
    .iter()
    .map(|r| format!("{}  {}\n", present::short_date(r.date), present::short_label(r.status)))
    .collect()
}

#[cfg(test)]
mod tests {
  use agua_core::cycle::generate_month;

  use super::*;

  fn key(s: &str) -> DateKey { s.parse().unwrap() }

  #[test]
  fn home_hides_next_supply_when_water_today() {
    let anchor = Record::new(key("2025-01-10"), StatusValue::Present);
    let text = render_home(&HomeView::build(None, Some(&anchor), key("2025-01-10")));
    assert!(text.contains("SIM (previsto)"));
    assert!(!text.contains("Próximo"));
  }

  #[test]
  fn home_shows_indefinite_during_pause() {
    let today = key("2025-01-10");
    let text = render_home(&HomeView::build(Some(StatusValue::Paused), None, today));
    assert!(text.contains("PAUSA (confirmado)"));
    assert!(text.contains("Próximo fornecimento: Indefinido"));
  }

  #[test]
  fn month_grid_has_one_cell_per_day() {
    let month = YearMonth::new(2025, 2).unwrap();
    let anchor = Record::new(key("2025-02-01"), StatusValue::Present);
    let view = MonthView { month, days: generate_month(month, &[anchor], Some(&anchor)) };
    let text = render_month(&view, key("2025-02-03"));

    assert!(text.starts_with("Fevereiro 2025\n"));
    // February 2025 starts on a Saturday and ends on a Friday.
    let grid: Vec<&str> = text.lines().skip(2).take_while(|l| !l.starts_with('~')).collect();
    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0].trim(), "1~*");
    assert!(text.contains(" 3~<"));
    assert!(text.contains(" 2x "));
    assert!(text.contains("28x "));
  }

  #[test]
  fn history_lists_newest_first_as_given() {
    let records = [
      Record::new(key("2025-01-11"), StatusValue::Paused),
      Record::new(key("2025-01-10"), StatusValue::Absent),
    ];
    assert_eq!(render_history(&records), "11/01  PAUSA\n10/01  SEM\n");
    assert_eq!(render_history(&[]), "Nenhum ajuste registrado ainda\n");
  }
}
