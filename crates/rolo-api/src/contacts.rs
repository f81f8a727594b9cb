//! Handlers for `/contacts/` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/contacts/`     | `?skip&limit&search&group_id` |
//! | `POST`   | `/contacts/`     | Body: the full set of mutable attributes |
//! | `GET`    | `/contacts/{id}` | 404 if not found |
//! | `PUT`    | `/contacts/{id}` | Full replace of every mutable field |
//! | `DELETE` | `/contacts/{id}` | |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rolo_core::{
  contact::{Contact, NewContact, is_valid_email},
  store::{ContactQuery, ContactStore, DEFAULT_LIMIT, MAX_LIMIT},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── Shared checks ───────────────────────────────────────────────────────────

/// Validation sequence shared by create and update: email syntax, group
/// existence, email uniqueness.
///
/// `exclude` carries the id of the contact being updated, so its own email
/// does not count as a conflict. These are best-effort fast paths; the store
/// re-reports uniqueness violations that slip past them.
async fn check_references<S>(
  store: &S,
  input: &NewContact,
  exclude: Option<i64>,
) -> Result<(), ApiError>
where
  S: ContactStore,
{
  if let Some(email) = input.email.as_deref()
    && !is_valid_email(email)
  {
    return Err(ApiError::Validation(format!(
      "invalid email address: {email:?}"
    )));
  }

  if let Some(group_id) = input.group_id {
    store
      .get_group(group_id)
      .await?
      .ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;
  }

  if let Some(email) = input.email.as_deref()
    && let Some(holder) = store.contact_id_by_email(email).await?
    && Some(holder) != exclude
  {
    return Err(ApiError::Conflict(match exclude {
      Some(_) => "Email already registered to another contact".to_string(),
      None => "Email already registered".to_string(),
    }));
  }

  Ok(())
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /contacts/`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(input): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  check_references(store.as_ref(), &input, None).await?;
  let contact = store.insert_contact(input).await?;
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub skip:     u64,
  pub limit:    Option<u32>,
  pub search:   Option<String>,
  pub group_id: Option<i64>,
}

/// `GET /contacts/[?skip=..][&limit=..][&search=..][&group_id=..]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
  if limit < 1 || limit > MAX_LIMIT {
    return Err(ApiError::Validation(format!(
      "limit must be between 1 and {MAX_LIMIT}"
    )));
  }

  let query = ContactQuery {
    search:   params.search,
    group_id: params.group_id,
    limit,
    offset:   params.skip,
  };
  Ok(Json(store.list_contacts(&query).await?))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = store
    .get_contact(id)
    .await?
    .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;
  Ok(Json(contact))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}` — full replace of every mutable field.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(input): Json<NewContact>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  store
    .get_contact(id)
    .await?
    .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

  check_references(store.as_ref(), &input, Some(id)).await?;

  let contact = store
    .update_contact(id, input)
    .await?
    .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;
  Ok(Json(contact))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  store
    .get_contact(id)
    .await?
    .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

  store.delete_contact(id).await?;

  Ok(Json(json!({
    "message": format!("Contact {id} deleted successfully")
  })))
}
