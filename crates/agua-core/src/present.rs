//! User-facing text for statuses and dates (Brazilian Portuguese, as shown
//! to the household).

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
  cycle::{next_supply_date, resolve_today_status},
  date::DateKey,
  record::{Record, StatusValue},
};

/// Shown when the next supply date cannot be determined.
pub const INDEFINITE: &str = "Indefinido";

/// Column headers for a Sunday-first week.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

const WEEKDAY_NAMES: [&str; 7] =
  ["Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado"];

const MONTH_NAMES: [&str; 12] = [
  "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto",
  "Setembro", "Outubro", "Novembro", "Dezembro",
];

// ─── Status text ─────────────────────────────────────────────────────────────

/// Compact label used in history lists.
pub fn short_label(status: StatusValue) -> &'static str {
  match status {
    StatusValue::Present => "TEM",
    StatusValue::Absent => "SEM",
    StatusValue::Paused => "PAUSA",
  }
}

/// Large heading on the home screen.
pub fn headline(status: StatusValue) -> &'static str {
  match status {
    StatusValue::Present => "SIM",
    StatusValue::Absent => "NÃO",
    StatusValue::Paused => "PAUSA",
  }
}

pub fn message(status: StatusValue) -> &'static str {
  match status {
    StatusValue::Present => "Hoje TEM água",
    StatusValue::Absent => "Hoje NÃO tem água",
    StatusValue::Paused => "Fornecimento em pausa",
  }
}

/// Feedback after today's status has been saved.
pub fn confirmation(status: StatusValue) -> &'static str {
  match status {
    StatusValue::Present => "Registrado: Hoje TEM água!",
    StatusValue::Absent => "Registrado: Hoje NÃO tem água",
    StatusValue::Paused => "Registrado: Fornecimento em PAUSA",
  }
}

/// Single-column calendar glyph; `None` marks a day nothing is known about.
pub fn symbol(status: Option<StatusValue>) -> &'static str {
  match status {
    Some(StatusValue::Present) => "~",
    Some(StatusValue::Absent) => "x",
    Some(StatusValue::Paused) => "‖",
    None => "·",
  }
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// `1..=12` to the month's name. Out-of-range months yield an empty string.
pub fn month_name(month: u32) -> &'static str {
  month
    .checked_sub(1)
    .and_then(|i| MONTH_NAMES.get(i as usize))
    .copied()
    .unwrap_or_default()
}

/// e.g. `"Quinta, 2 de Janeiro"`.
pub fn readable_date(date: DateKey) -> String {
  let d = date.date();
  let weekday = WEEKDAY_NAMES[d.weekday().num_days_from_sunday() as usize];
  format!("{weekday}, {} de {}", d.day(), month_name(d.month()))
}

/// e.g. `"02/01"`.
pub fn short_date(date: DateKey) -> String { format!("{:02}/{:02}", date.day(), date.month()) }

pub fn next_supply_text(next: Option<DateKey>) -> String {
  next.map(readable_date).unwrap_or_else(|| INDEFINITE.to_owned())
}

// ─── Home view ───────────────────────────────────────────────────────────────

/// Everything the home screen shows, computed without I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeView {
  pub today:       DateKey,
  pub status:      StatusValue,
  /// Whether `status` was confirmed for today rather than inferred.
  pub confirmed:   bool,
  pub message:     String,
  pub next_supply: Option<DateKey>,
  pub next_text:   String,
}

impl HomeView {
  pub fn build(confirmed_today: Option<StatusValue>, anchor: Option<&Record>, today: DateKey) -> Self {
    let status = resolve_today_status(confirmed_today, anchor, today);
    let next_supply = next_supply_date(status, today);
    Self {
      today,
      status,
      confirmed: confirmed_today.is_some(),
      message: message(status).to_owned(),
      next_supply,
      next_text: next_supply_text(next_supply),
    }
  }

  /// Whether the "next supply" panel is worth showing.
  pub fn shows_next_supply(&self) -> bool { self.status != StatusValue::Present }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(s: &str) -> DateKey { s.parse().unwrap() }

  #[test]
  fn readable_date_uses_portuguese_names() {
    // 2025-01-02 was a Thursday.
    assert_eq!(readable_date(key("2025-01-02")), "Quinta, 2 de Janeiro");
    assert_eq!(readable_date(key("2025-06-01")), "Domingo, 1 de Junho");
    assert_eq!(readable_date(key("2025-03-15")), "Sábado, 15 de Março");
  }

  #[test]
  fn short_date_is_zero_padded() {
    assert_eq!(short_date(key("2025-01-02")), "02/01");
    assert_eq!(short_date(key("2025-12-25")), "25/12");
  }

  #[test]
  fn month_names_bounds() {
    assert_eq!(month_name(1), "Janeiro");
    assert_eq!(month_name(12), "Dezembro");
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
  }

  #[test]
  fn next_supply_text_marks_unknown() {
    assert_eq!(next_supply_text(None), INDEFINITE);
    assert_eq!(next_supply_text(Some(key("2025-01-02"))), "Quinta, 2 de Janeiro");
  }

  #[test]
  fn labels_for_each_status() {
    assert_eq!(short_label(StatusValue::Present), "TEM");
    assert_eq!(short_label(StatusValue::Absent), "SEM");
    assert_eq!(headline(StatusValue::Absent), "NÃO");
    assert_eq!(message(StatusValue::Paused), "Fornecimento em pausa");
    assert_eq!(confirmation(StatusValue::Present), "Registrado: Hoje TEM água!");
  }

  #[test]
  fn home_without_any_data_fails_safe() {
    let today = key("2025-01-10");
    let view = HomeView::build(None, None, today);
    assert_eq!(view.status, StatusValue::Absent);
    assert!(!view.confirmed);
    assert_eq!(view.message, "Hoje NÃO tem água");
    assert_eq!(view.next_supply, Some(key("2025-01-11")));
    assert!(view.shows_next_supply());
  }

  #[test]
  fn home_with_confirmed_pause_is_indefinite() {
    let today = key("2025-01-10");
    let view = HomeView::build(
      Some(StatusValue::Paused),
      Some(&Record::new(today, StatusValue::Paused)),
      today,
    );
    assert!(view.confirmed);
    assert_eq!(view.next_supply, None);
    assert_eq!(view.next_text, INDEFINITE);
  }

  #[test]
  fn home_with_inferred_water_hides_next_panel() {
    let anchor = Record::new(key("2025-01-08"), StatusValue::Present);
    let view = HomeView::build(None, Some(&anchor), key("2025-01-10"));
    assert_eq!(view.status, StatusValue::Present);
    assert_eq!(view.next_supply, Some(key("2025-01-12")));
    assert!(!view.shows_next_supply());
  }
}
