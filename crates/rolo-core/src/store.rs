//! The [`ContactStore`] trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-mysql`).
//! Higher layers (`rolo-api`, `rolo-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  contact::{Contact, NewContact},
  group::{ContactGroup, NewGroup},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Default and maximum page size for [`ContactStore::list_contacts`].
pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 100;

/// Parameters for [`ContactStore::list_contacts`].
#[derive(Debug, Clone)]
pub struct ContactQuery {
  /// Case-insensitive substring matched against first name, last name, or
  /// email; any match qualifies.
  pub search:   Option<String>,
  /// Restrict to contacts with this exact group reference.
  pub group_id: Option<i64>,
  pub limit:    u32,
  pub offset:   u64,
}

impl Default for ContactQuery {
  fn default() -> Self {
    Self { search: None, group_id: None, limit: DEFAULT_LIMIT, offset: 0 }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Rolo contact store backend.
///
/// Mutating methods execute a single statement each; the business-rule
/// sequencing (existence checks, uniqueness pre-checks) lives in the HTTP
/// layer. Backends must still report their own duplicate-key violations as
/// [`Error::EmailTaken`](crate::Error::EmailTaken) /
/// [`Error::GroupNameTaken`](crate::Error::GroupNameTaken) — under concurrent
/// requests the store's constraint is the authoritative conflict signal, and
/// the pre-checks are only a fast path.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  // ── Contacts ──────────────────────────────────────────────────────────

  /// Insert a new contact and return the stored record, with identity and
  /// timestamps assigned by the store.
  fn insert_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact>> + Send + '_;

  /// List contacts matching `query`, ordered by last name then first name,
  /// ascending.
  fn list_contacts<'a>(
    &'a self,
    query: &'a ContactQuery,
  ) -> impl Future<Output = Result<Vec<Contact>>> + Send + 'a;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + '_;

  /// Overwrite every mutable field of the contact and refresh its update
  /// timestamp. Returns `None` if the contact does not exist.
  fn update_contact(
    &self,
    id: i64,
    input: NewContact,
  ) -> impl Future<Output = Result<Option<Contact>>> + Send + '_;

  /// Delete a contact. Returns `false` if the contact did not exist.
  fn delete_contact(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool>> + Send + '_;

  /// Id of the contact currently holding `email`, if any.
  fn contact_id_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<i64>>> + Send + 'a;

  // ── Groups ────────────────────────────────────────────────────────────

  /// Insert a new group and return the stored record.
  fn insert_group(
    &self,
    input: NewGroup,
  ) -> impl Future<Output = Result<ContactGroup>> + Send + '_;

  /// List all groups, ordered by name ascending.
  fn list_groups(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactGroup>>> + Send + '_;

  /// Retrieve a group by id. Returns `None` if not found.
  fn get_group(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<ContactGroup>>> + Send + '_;

  /// Overwrite the group's mutable fields. Returns `None` if the group does
  /// not exist.
  fn update_group(
    &self,
    id: i64,
    input: NewGroup,
  ) -> impl Future<Output = Result<Option<ContactGroup>>> + Send + '_;

  /// Delete a group row. Returns `false` if the group did not exist.
  ///
  /// Callers are expected to detach members first; this method removes only
  /// the group row itself.
  fn delete_group(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool>> + Send + '_;

  /// Id of the group currently holding `name`, if any.
  fn group_id_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<i64>>> + Send + 'a;

  /// Number of contacts currently referencing `group_id`.
  fn count_group_members(
    &self,
    group_id: i64,
  ) -> impl Future<Output = Result<u64>> + Send + '_;

  /// Clear the group reference on every contact pointing at `group_id`.
  /// Returns the number of contacts updated.
  fn detach_group_members(
    &self,
    group_id: i64,
  ) -> impl Future<Output = Result<u64>> + Send + '_;
}
