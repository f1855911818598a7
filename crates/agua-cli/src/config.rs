//! Layered configuration: CLI flags and `AGUA_*` variables over the TOML
//! file, over defaults.

use std::path::{Path, PathBuf};

use agua_rest::{DEFAULT_TABLE, RestConfig};
use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Shape of the optional TOML config file. Flags parsed by clap are folded
/// into the same shape so both layers merge field by field.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
  /// Hosted project URL.
  pub url:      Option<String>,
  /// Public API key for the hosted project.
  pub key:      Option<String>,
  pub table:    Option<String>,
  /// Local SQLite file; when set, the hosted store is not used.
  pub db:       Option<PathBuf>,
  pub log_file: Option<PathBuf>,
}

impl ConfigFile {
  pub fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }

  /// Fields set in `self` win; the rest come from `fallback`.
  pub fn over(self, fallback: Self) -> Self {
    Self {
      url:      self.url.or(fallback.url),
      key:      self.key.or(fallback.key),
      table:    self.table.or(fallback.table),
      db:       self.db.or(fallback.db),
      log_file: self.log_file.or(fallback.log_file),
    }
  }
}

/// Which store the client talks to.
#[derive(Debug, Clone)]
pub enum BackendSettings {
  Rest(RestConfig),
  Sqlite(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Settings {
  pub backend:  BackendSettings,
  pub log_file: Option<PathBuf>,
}

impl Settings {
  pub fn resolve(cfg: ConfigFile) -> Result<Self> {
    let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

    let backend = if let Some(db) = cfg.db {
      BackendSettings::Sqlite(expand_tilde(&db))
    } else {
      let Some(base_url) = non_empty(cfg.url) else {
        bail!("no store configured: set --url/AGUA_URL (with --key) or --db/AGUA_DB");
      };
      let Some(api_key) = non_empty(cfg.key) else {
        bail!("--key/AGUA_KEY is required with --url");
      };
      BackendSettings::Rest(RestConfig {
        base_url,
        api_key,
        table: non_empty(cfg.table).unwrap_or_else(|| DEFAULT_TABLE.to_owned()),
      })
    };

    Ok(Self { backend, log_file: cfg.log_file.map(|p| expand_tilde(&p)) })
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags_override_file() {
    let file: ConfigFile = toml::from_str(
      r#"
        url = "https://file.example"
        key = "file-key"
        table = "outra"
      "#,
    )
    .unwrap();
    let flags = ConfigFile { url: Some("https://flag.example".into()), ..Default::default() };

    let settings = Settings::resolve(flags.over(file)).unwrap();
    let BackendSettings::Rest(rest) = settings.backend else {
      panic!("expected rest backend");
    };
    assert_eq!(rest.base_url, "https://flag.example");
    assert_eq!(rest.api_key, "file-key");
    assert_eq!(rest.table, "outra");
  }

  #[test]
  fn db_selects_sqlite() {
    let cfg = ConfigFile {
      db: Some("/tmp/agua.db".into()),
      url: Some("https://ignored.example".into()),
      ..Default::default()
    };
    let settings = Settings::resolve(cfg).unwrap();
    assert!(matches!(settings.backend, BackendSettings::Sqlite(p) if p == Path::new("/tmp/agua.db")));
  }

  #[test]
  fn table_defaults() {
    let cfg = ConfigFile {
      url: Some("https://x.example".into()),
      key: Some("k".into()),
      ..Default::default()
    };
    let BackendSettings::Rest(rest) = Settings::resolve(cfg).unwrap().backend else {
      panic!("expected rest backend");
    };
    assert_eq!(rest.table, DEFAULT_TABLE);
  }

  #[test]
  fn missing_store_is_an_error() {
    assert!(Settings::resolve(ConfigFile::default()).is_err());
    let no_key = ConfigFile { url: Some("https://x.example".into()), ..Default::default() };
    assert!(Settings::resolve(no_key).is_err());
  }

  #[test]
  fn unknown_file_keys_are_rejected() {
    assert!(toml::from_str::<ConfigFile>("colour = \"blue\"").is_err());
  }
}
