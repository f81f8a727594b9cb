//! Row-decoding helpers between MySQL rows and Rolo domain types.
//!
//! Columns are read by name so the helpers work for any statement that
//! selects the full column set.

use rolo_core::{Error, Result, contact::Contact, group::ContactGroup};
use sqlx::{Row as _, mysql::MySqlRow};

/// Wrap any sqlx error as a backend failure.
pub(crate) fn backend(e: sqlx::Error) -> Error { Error::Backend(Box::new(e)) }

pub(crate) fn contact_from_row(row: &MySqlRow) -> Result<Contact> {
  let decode = || -> Result<Contact, sqlx::Error> {
    Ok(Contact {
      contact_id: row.try_get("contact_id")?,
      first_name: row.try_get("first_name")?,
      last_name:  row.try_get("last_name")?,
      email:      row.try_get("email")?,
      phone:      row.try_get("phone")?,
      address:    row.try_get("address")?,
      birthday:   row.try_get("birthday")?,
      group_id:   row.try_get("group_id")?,
      created_at: row.try_get("created_at")?,
      updated_at: row.try_get("updated_at")?,
    })
  };
  decode().map_err(backend)
}

pub(crate) fn group_from_row(row: &MySqlRow) -> Result<ContactGroup> {
  let decode = || -> Result<ContactGroup, sqlx::Error> {
    Ok(ContactGroup {
      group_id:    row.try_get("group_id")?,
      group_name:  row.try_get("group_name")?,
      description: row.try_get("description")?,
      created_at:  row.try_get("created_at")?,
      updated_at:  row.try_get("updated_at")?,
    })
  };
  decode().map_err(backend)
}
