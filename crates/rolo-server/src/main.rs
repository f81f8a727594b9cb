//! rolo-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), connects to
//! MySQL, and serves the contact book JSON API over HTTP.
//!
//! Every setting can also be supplied through the environment with the `ROLO`
//! prefix and `__` as the nesting separator, e.g. `ROLO__DATABASE__HOST`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use rolo_store_mysql::{MysqlStore, StoreConfig};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ServerConfig {
  host:     String,
  port:     u16,
  database: StoreConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:     "0.0.0.0".to_string(),
      port:     8000,
      database: StoreConfig::default(),
    }
  }
}

#[derive(Parser)]
#[command(author, version, about = "Rolo contact book API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(
      config::Environment::with_prefix("ROLO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true),
    )
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store = MysqlStore::connect(&server_cfg.database)
    .await
    .context("failed to connect to MySQL")?;

  let app = rolo_api::api_router(Arc::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
