//! Error types for `rolo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("contact not found: {0}")]
  ContactNotFound(i64),

  #[error("group not found: {0}")]
  GroupNotFound(i64),

  /// Another contact already holds this email address.
  #[error("email already registered: {0}")]
  EmailTaken(String),

  /// Another group already holds this name.
  #[error("group name already exists: {0:?}")]
  GroupNameTaken(String),

  /// Any lower-level data-access failure, including connectivity loss.
  #[error("database error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
