//! Async HTTP client for the hosted `ciclo_agua` table.

use std::time::Duration;

use agua_core::{date::DateKey, record::Record, store::RecordStore};
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::{
  Error, Result, query,
  row::{Row, decode_rows},
};

/// Table name used by the hosted project.
pub const DEFAULT_TABLE: &str = "ciclo_agua";

/// Connection settings for the hosted store.
#[derive(Debug, Clone)]
pub struct RestConfig {
  /// Project URL, e.g. `https://<project>.supabase.co`.
  pub base_url: String,
  /// Public (anon) API key, sent both as `apikey` and as a bearer token.
  pub api_key:  String,
  pub table:    String,
}

/// [`RecordStore`] over PostgREST.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct RestStore {
  client: Client,
  config: RestConfig,
}

impl RestStore {
  pub fn new(config: RestConfig) -> Result<Self> {
    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!(
      "{}/rest/v1/{}",
      self.config.base_url.trim_end_matches('/'),
      self.config.table
    )
  }

  fn auth(&self, req: RequestBuilder) -> RequestBuilder {
    req
      .header("apikey", &self.config.api_key)
      .bearer_auth(&self.config.api_key)
  }

  /// Turn a non-2xx response into [`Error::Status`].
  async fn check(&self, method: &'static str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(Error::Status { method, table: self.config.table.clone(), status, body })
  }

  async fn select(&self, params: query::Params) -> Result<Vec<Record>> {
    debug!(table = %self.config.table, ?params, "GET");
    let resp = self
      .auth(self.client.get(self.url()))
      .query(&params)
      .send()
      .await?;
    let body = self.check("GET", resp).await?.text().await?;
    decode_rows(&body)
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for RestStore {
  type Error = Error;

  async fn read_by_date(&self, date: DateKey) -> Result<Option<Record>> {
    Ok(self.select(query::by_date(date)).await?.into_iter().next())
  }

  async fn read_range(&self, start: DateKey, end: DateKey) -> Result<Vec<Record>> {
    self.select(query::range(start, end)).await
  }

  async fn read_latest(&self) -> Result<Option<Record>> {
    Ok(self.select(query::newest(1)).await?.into_iter().next())
  }

  async fn read_recent(&self, limit: usize) -> Result<Vec<Record>> {
    self.select(query::newest(limit)).await
  }

  async fn upsert(&self, record: Record) -> Result<()> {
    debug!(table = %self.config.table, date = %record.date, status = %record.status, "POST upsert");
    let resp = self
      .auth(self.client.post(self.url()))
      .query(&query::upsert())
      .header("Prefer", "resolution=merge-duplicates,return=minimal")
      .json(&Row::from(record))
      .send()
      .await?;
    self.check("POST", resp).await?;
    Ok(())
  }
}
