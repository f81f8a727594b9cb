//! In-memory [`ContactStore`] used by the router tests.
//!
//! Mirrors the backend contract: per-table integer ids, store-assigned
//! timestamps, ordered listings, and duplicate-key reporting on writes.

use std::{collections::BTreeMap, sync::Mutex};

use chrono::Utc;
use rolo_core::{
  Error, Result,
  contact::{Contact, NewContact},
  group::{ContactGroup, NewGroup},
  store::{ContactQuery, ContactStore},
};

#[derive(Default)]
pub struct MemoryStore {
  inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
  contacts:        BTreeMap<i64, Contact>,
  groups:          BTreeMap<i64, ContactGroup>,
  next_contact_id: i64,
  next_group_id:   i64,
}

fn matches_search(contact: &Contact, term: &str) -> bool {
  contact.first_name.to_lowercase().contains(term)
    || contact.last_name.to_lowercase().contains(term)
    || contact
      .email
      .as_ref()
      .is_some_and(|e| e.to_lowercase().contains(term))
}

impl ContactStore for MemoryStore {
  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn insert_contact(&self, input: NewContact) -> Result<Contact> {
    let mut inner = self.inner.lock().unwrap();

    if let Some(email) = &input.email
      && inner
        .contacts
        .values()
        .any(|c| c.email.as_deref() == Some(email.as_str()))
    {
      return Err(Error::EmailTaken(email.clone()));
    }

    inner.next_contact_id += 1;
    let id = inner.next_contact_id;
    let now = Utc::now();
    let contact = Contact {
      contact_id: id,
      first_name: input.first_name,
      last_name:  input.last_name,
      email:      input.email,
      phone:      input.phone,
      address:    input.address,
      birthday:   input.birthday,
      group_id:   input.group_id,
      created_at: now,
      updated_at: now,
    };
    inner.contacts.insert(id, contact.clone());
    Ok(contact)
  }

  async fn list_contacts(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
    let inner = self.inner.lock().unwrap();
    let term = query.search.as_ref().map(|s| s.to_lowercase());

    let mut matches: Vec<Contact> = inner
      .contacts
      .values()
      .filter(|c| term.as_deref().is_none_or(|t| matches_search(c, t)))
      .filter(|c| query.group_id.is_none() || c.group_id == query.group_id)
      .cloned()
      .collect();

    matches.sort_by(|a, b| {
      (a.last_name.as_str(), a.first_name.as_str())
        .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
    });

    Ok(
      matches
        .into_iter()
        .skip(query.offset as usize)
        .take(query.limit as usize)
        .collect(),
    )
  }

  async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
    Ok(self.inner.lock().unwrap().contacts.get(&id).cloned())
  }

  async fn update_contact(
    &self,
    id: i64,
    input: NewContact,
  ) -> Result<Option<Contact>> {
    let mut inner = self.inner.lock().unwrap();

    if let Some(email) = &input.email
      && inner
        .contacts
        .values()
        .any(|c| c.contact_id != id && c.email.as_deref() == Some(email.as_str()))
    {
      return Err(Error::EmailTaken(email.clone()));
    }

    let Some(contact) = inner.contacts.get_mut(&id) else {
      return Ok(None);
    };
    contact.first_name = input.first_name;
    contact.last_name = input.last_name;
    contact.email = input.email;
    contact.phone = input.phone;
    contact.address = input.address;
    contact.birthday = input.birthday;
    contact.group_id = input.group_id;
    contact.updated_at = Utc::now();
    Ok(Some(contact.clone()))
  }

  async fn delete_contact(&self, id: i64) -> Result<bool> {
    Ok(self.inner.lock().unwrap().contacts.remove(&id).is_some())
  }

  async fn contact_id_by_email(&self, email: &str) -> Result<Option<i64>> {
    Ok(
      self
        .inner
        .lock()
        .unwrap()
        .contacts
        .values()
        .find(|c| c.email.as_deref() == Some(email))
        .map(|c| c.contact_id),
    )
  }

  // ── Groups ────────────────────────────────────────────────────────────────

  async fn insert_group(&self, input: NewGroup) -> Result<ContactGroup> {
    let mut inner = self.inner.lock().unwrap();

    if inner.groups.values().any(|g| g.group_name == input.group_name) {
      return Err(Error::GroupNameTaken(input.group_name));
    }

    inner.next_group_id += 1;
    let id = inner.next_group_id;
    let now = Utc::now();
    let group = ContactGroup {
      group_id:    id,
      group_name:  input.group_name,
      description: input.description,
      created_at:  now,
      updated_at:  now,
    };
    inner.groups.insert(id, group.clone());
    Ok(group)
  }

  async fn list_groups(&self) -> Result<Vec<ContactGroup>> {
    let inner = self.inner.lock().unwrap();
    let mut groups: Vec<ContactGroup> = inner.groups.values().cloned().collect();
    groups.sort_by(|a, b| a.group_name.cmp(&b.group_name));
    Ok(groups)
  }

  async fn get_group(&self, id: i64) -> Result<Option<ContactGroup>> {
    Ok(self.inner.lock().unwrap().groups.get(&id).cloned())
  }

  async fn update_group(
    &self,
    id: i64,
    input: NewGroup,
  ) -> Result<Option<ContactGroup>> {
    let mut inner = self.inner.lock().unwrap();

    if inner
      .groups
      .values()
      .any(|g| g.group_id != id && g.group_name == input.group_name)
    {
      return Err(Error::GroupNameTaken(input.group_name));
    }

    let Some(group) = inner.groups.get_mut(&id) else {
      return Ok(None);
    };
    group.group_name = input.group_name;
    group.description = input.description;
    group.updated_at = Utc::now();
    Ok(Some(group.clone()))
  }

  async fn delete_group(&self, id: i64) -> Result<bool> {
    Ok(self.inner.lock().unwrap().groups.remove(&id).is_some())
  }

  async fn group_id_by_name(&self, name: &str) -> Result<Option<i64>> {
    Ok(
      self
        .inner
        .lock()
        .unwrap()
        .groups
        .values()
        .find(|g| g.group_name == name)
        .map(|g| g.group_id),
    )
  }

  async fn count_group_members(&self, group_id: i64) -> Result<u64> {
    Ok(
      self
        .inner
        .lock()
        .unwrap()
        .contacts
        .values()
        .filter(|c| c.group_id == Some(group_id))
        .count() as u64,
    )
  }

  async fn detach_group_members(&self, group_id: i64) -> Result<u64> {
    let mut inner = self.inner.lock().unwrap();
    let mut detached = 0;
    for contact in inner.contacts.values_mut() {
      if contact.group_id == Some(group_id) {
        contact.group_id = None;
        contact.updated_at = Utc::now();
        detached += 1;
      }
    }
    Ok(detached)
  }
}
