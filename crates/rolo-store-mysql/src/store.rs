//! [`MysqlStore`] — the MySQL implementation of [`ContactStore`].

use rolo_core::{
  Error, Result,
  contact::{Contact, NewContact},
  group::{ContactGroup, NewGroup},
  store::{ContactQuery, ContactStore},
};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::{
  config::StoreConfig,
  row::{backend, contact_from_row, group_from_row},
  schema::SCHEMA,
};

const CONTACT_COLUMNS: &str = "contact_id, group_id, first_name, last_name, \
                               email, phone, address, birthday, created_at, \
                               updated_at";
const GROUP_COLUMNS: &str =
  "group_id, group_name, description, created_at, updated_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Rolo contact store backed by a MySQL connection pool.
///
/// Cloning is cheap — the pool is reference-counted.
#[derive(Clone)]
pub struct MysqlStore {
  pool: MySqlPool,
}

impl MysqlStore {
  /// Connect to MySQL and run schema initialisation.
  pub async fn connect(config: &StoreConfig) -> Result<Self> {
    tracing::info!(
      host = %config.host,
      database = %config.database,
      max_connections = config.max_connections,
      "connecting to MySQL"
    );

    let pool = MySqlPoolOptions::new()
      .max_connections(config.max_connections)
      .connect_with(config.connect_options())
      .await
      .map_err(backend)?;

    let store = Self { pool };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    for statement in SCHEMA {
      sqlx::query(statement)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
    }
    Ok(())
  }

  /// Re-read a contact row, typically after a mutation.
  async fn fetch_contact(&self, id: i64) -> Result<Option<Contact>> {
    let sql =
      format!("SELECT {CONTACT_COLUMNS} FROM Contacts WHERE contact_id = ?");
    let row = sqlx::query(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(backend)?;
    row.as_ref().map(contact_from_row).transpose()
  }

  async fn fetch_group(&self, id: i64) -> Result<Option<ContactGroup>> {
    let sql =
      format!("SELECT {GROUP_COLUMNS} FROM ContactGroups WHERE group_id = ?");
    let row = sqlx::query(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(backend)?;
    row.as_ref().map(group_from_row).transpose()
  }
}

// ─── Error attribution ───────────────────────────────────────────────────────

/// Map a write error on `Contacts`, attributing duplicate-key violations to
/// the email unique index (the table's only one).
fn contact_write_error(email: Option<&str>, e: sqlx::Error) -> Error {
  if let sqlx::Error::Database(db) = &e
    && db.is_unique_violation()
  {
    return Error::EmailTaken(email.unwrap_or_default().to_string());
  }
  backend(e)
}

/// Map a write error on `ContactGroups`, attributing duplicate-key violations
/// to the group-name unique index.
fn group_write_error(name: &str, e: sqlx::Error) -> Error {
  if let sqlx::Error::Database(db) = &e
    && db.is_unique_violation()
  {
    return Error::GroupNameTaken(name.to_string());
  }
  backend(e)
}

// ─── List query ──────────────────────────────────────────────────────────────

/// Assemble the dynamic list statement. Substring search relies on the
/// store's default case-insensitive collation for `LIKE`.
pub(crate) fn list_sql(has_search: bool, has_group: bool) -> String {
  let mut sql = format!("SELECT {CONTACT_COLUMNS} FROM Contacts WHERE 1=1");
  if has_search {
    sql.push_str(" AND (first_name LIKE ? OR last_name LIKE ? OR email LIKE ?)");
  }
  if has_group {
    sql.push_str(" AND group_id = ?");
  }
  sql.push_str(" ORDER BY last_name, first_name LIMIT ? OFFSET ?");
  sql
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for MysqlStore {
  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn insert_contact(&self, input: NewContact) -> Result<Contact> {
    let result = sqlx::query(
      "INSERT INTO Contacts (group_id, first_name, last_name, email, phone, \
       address, birthday) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(input.group_id)
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.address)
    .bind(input.birthday)
    .execute(&self.pool)
    .await
    .map_err(|e| contact_write_error(input.email.as_deref(), e))?;

    let id = result.last_insert_id() as i64;
    self
      .fetch_contact(id)
      .await?
      .ok_or(Error::ContactNotFound(id))
  }

  async fn list_contacts(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
    let sql = list_sql(query.search.is_some(), query.group_id.is_some());

    let mut q = sqlx::query(&sql);
    if let Some(term) = &query.search {
      let pattern = format!("%{term}%");
      q = q.bind(pattern.clone()).bind(pattern.clone()).bind(pattern);
    }
    if let Some(group_id) = query.group_id {
      q = q.bind(group_id);
    }
    q = q.bind(query.limit).bind(query.offset);

    let rows = q.fetch_all(&self.pool).await.map_err(backend)?;
    rows.iter().map(contact_from_row).collect()
  }

  async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
    self.fetch_contact(id).await
  }

  async fn update_contact(
    &self,
    id: i64,
    input: NewContact,
  ) -> Result<Option<Contact>> {
    sqlx::query(
      "UPDATE Contacts SET group_id = ?, first_name = ?, last_name = ?, \
       email = ?, phone = ?, address = ?, birthday = ? WHERE contact_id = ?",
    )
    .bind(input.group_id)
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.address)
    .bind(input.birthday)
    .bind(id)
    .execute(&self.pool)
    .await
    .map_err(|e| contact_write_error(input.email.as_deref(), e))?;

    // A no-op update reports zero affected rows, so existence is settled by
    // the re-read rather than by rows_affected.
    self.fetch_contact(id).await
  }

  async fn delete_contact(&self, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM Contacts WHERE contact_id = ?")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(backend)?;
    Ok(result.rows_affected() > 0)
  }

  async fn contact_id_by_email(&self, email: &str) -> Result<Option<i64>> {
    sqlx::query_scalar("SELECT contact_id FROM Contacts WHERE email = ?")
      .bind(email)
      .fetch_optional(&self.pool)
      .await
      .map_err(backend)
  }

  // ── Groups ────────────────────────────────────────────────────────────────

  async fn insert_group(&self, input: NewGroup) -> Result<ContactGroup> {
    let result = sqlx::query(
      "INSERT INTO ContactGroups (group_name, description) VALUES (?, ?)",
    )
    .bind(&input.group_name)
    .bind(&input.description)
    .execute(&self.pool)
    .await
    .map_err(|e| group_write_error(&input.group_name, e))?;

    let id = result.last_insert_id() as i64;
    self.fetch_group(id).await?.ok_or(Error::GroupNotFound(id))
  }

  async fn list_groups(&self) -> Result<Vec<ContactGroup>> {
    let sql =
      format!("SELECT {GROUP_COLUMNS} FROM ContactGroups ORDER BY group_name");
    let rows = sqlx::query(&sql)
      .fetch_all(&self.pool)
      .await
      .map_err(backend)?;
    rows.iter().map(group_from_row).collect()
  }

  async fn get_group(&self, id: i64) -> Result<Option<ContactGroup>> {
    self.fetch_group(id).await
  }

  async fn update_group(
    &self,
    id: i64,
    input: NewGroup,
  ) -> Result<Option<ContactGroup>> {
    sqlx::query(
      "UPDATE ContactGroups SET group_name = ?, description = ? \
       WHERE group_id = ?",
    )
    .bind(&input.group_name)
    .bind(&input.description)
    .bind(id)
    .execute(&self.pool)
    .await
    .map_err(|e| group_write_error(&input.group_name, e))?;

    self.fetch_group(id).await
  }

  async fn delete_group(&self, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM ContactGroups WHERE group_id = ?")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(backend)?;
    Ok(result.rows_affected() > 0)
  }

  async fn group_id_by_name(&self, name: &str) -> Result<Option<i64>> {
    sqlx::query_scalar("SELECT group_id FROM ContactGroups WHERE group_name = ?")
      .bind(name)
      .fetch_optional(&self.pool)
      .await
      .map_err(backend)
  }

  async fn count_group_members(&self, group_id: i64) -> Result<u64> {
    let count: i64 =
      sqlx::query_scalar("SELECT COUNT(*) FROM Contacts WHERE group_id = ?")
        .bind(group_id)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
    Ok(count as u64)
  }

  async fn detach_group_members(&self, group_id: i64) -> Result<u64> {
    let result = sqlx::query(
      "UPDATE Contacts SET group_id = NULL WHERE group_id = ?",
    )
    .bind(group_id)
    .execute(&self.pool)
    .await
    .map_err(backend)?;
    Ok(result.rows_affected())
  }
}
