//! ContactGroup — a named category that contacts may optionally belong to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact group. Deleting a group never deletes its contacts; the
/// store clears their group reference instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactGroup {
  pub group_id:    i64,
  pub group_name:  String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// The mutable group attributes, as accepted by create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewGroup {
  pub group_name:  String,
  pub description: Option<String>,
}
