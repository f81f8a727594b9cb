//! Contact — a person record with personal fields and optional group
//! membership.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A stored contact. Identity and timestamps are assigned by the store and
/// never accepted from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
  pub contact_id: i64,
  pub first_name: String,
  pub last_name:  String,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub address:    Option<String>,
  pub birthday:   Option<NaiveDate>,
  pub group_id:   Option<i64>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The full set of mutable contact attributes, as accepted by both create
/// and update (update has full-replace semantics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContact {
  pub first_name: String,
  pub last_name:  String,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub address:    Option<String>,
  pub birthday:   Option<NaiveDate>,
  pub group_id:   Option<i64>,
}

// ─── Email validation ────────────────────────────────────────────────────────

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email pattern")
});

/// Syntactic email check: one `@`, a non-empty local part, and a dotted
/// domain, with no whitespace. Deliberately far short of the full RFC 5322
/// grammar.
pub fn is_valid_email(email: &str) -> bool { EMAIL_RE.is_match(email) }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_plain_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
  }

  #[test]
  fn rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("user name@example.com"));
    assert!(!is_valid_email("user@@example.com"));
  }
}
