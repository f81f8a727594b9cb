//! Store configuration.

use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;

/// MySQL connection parameters.
///
/// Defaults target a local development instance: `root@localhost` with an
/// empty password and a `contactbook` database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
  pub host:            String,
  pub user:            String,
  pub password:        String,
  pub database:        String,
  pub max_connections: u32,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      host:            "localhost".to_string(),
      user:            "root".to_string(),
      password:        String::new(),
      database:        "contactbook".to_string(),
      max_connections: 5,
    }
  }
}

impl StoreConfig {
  pub(crate) fn connect_options(&self) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
      .host(&self.host)
      .username(&self.user)
      .password(&self.password)
      .database(&self.database)
  }
}
