//! PostgREST query-string builders, one per gateway operation.

use agua_core::date::DateKey;

pub type Params = Vec<(&'static str, String)>;

/// `?select=*&data=eq.<date>`
pub fn by_date(date: DateKey) -> Params {
  vec![("select", "*".into()), ("data", format!("eq.{date}"))]
}

/// `?select=*&data=gte.<start>&data=lte.<end>&order=data.asc`
pub fn range(start: DateKey, end: DateKey) -> Params {
  vec![
    ("select", "*".into()),
    ("data", format!("gte.{start}")),
    ("data", format!("lte.{end}")),
    ("order", "data.asc".into()),
  ]
}

/// `?select=*&order=data.desc&limit=<n>`
pub fn newest(limit: usize) -> Params {
  vec![
    ("select", "*".into()),
    ("order", "data.desc".into()),
    ("limit", limit.to_string()),
  ]
}

/// `?on_conflict=data`
pub fn upsert() -> Params { vec![("on_conflict", "data".into())] }

#[cfg(test)]
mod tests {
  use super::*;

  fn key(s: &str) -> DateKey { s.parse().unwrap() }

  fn render(params: &Params) -> String {
    params
      .iter()
      .map(|(k, v)| format!("{k}={v}"))
      .collect::<Vec<_>>()
      .join("&")
  }

  #[test]
  fn by_date_filters_on_equality() {
    assert_eq!(render(&by_date(key("2025-01-10"))), "select=*&data=eq.2025-01-10");
  }

  #[test]
  fn range_is_inclusive_and_ascending() {
    assert_eq!(
      render(&range(key("2025-02-01"), key("2025-02-28"))),
      "select=*&data=gte.2025-02-01&data=lte.2025-02-28&order=data.asc"
    );
  }

  #[test]
  fn newest_orders_descending() {
    assert_eq!(render(&newest(5)), "select=*&order=data.desc&limit=5");
  }
}
