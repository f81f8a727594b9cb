//! Handlers for `/groups/` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/groups/`     | All groups, ordered by name |
//! | `POST`   | `/groups/`     | Body: `{"group_name": .., "description": ..}` |
//! | `GET`    | `/groups/{id}` | 404 if not found |
//! | `PUT`    | `/groups/{id}` | Full replace |
//! | `DELETE` | `/groups/{id}` | Detaches members, then removes the group |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rolo_core::{
  group::{ContactGroup, NewGroup},
  store::ContactStore,
};
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /groups/`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(input): Json<NewGroup>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  if store.group_id_by_name(&input.group_name).await?.is_some() {
    return Err(ApiError::Conflict("Group name already exists".to_string()));
  }
  let group = store.insert_group(input).await?;
  Ok((StatusCode::CREATED, Json(group)))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /groups/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ContactGroup>>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(store.list_groups().await?))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /groups/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<ContactGroup>, ApiError>
where
  S: ContactStore,
{
  let group = store
    .get_group(id)
    .await?
    .ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;
  Ok(Json(group))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /groups/{id}` — full replace.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(input): Json<NewGroup>,
) -> Result<Json<ContactGroup>, ApiError>
where
  S: ContactStore,
{
  store
    .get_group(id)
    .await?
    .ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;

  if let Some(holder) = store.group_id_by_name(&input.group_name).await?
    && holder != id
  {
    return Err(ApiError::Conflict("Group name already exists".to_string()));
  }

  let group = store
    .update_group(id, input)
    .await?
    .ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;
  Ok(Json(group))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /groups/{id}`
///
/// Clears the group reference on every member as a separate preceding
/// statement, then removes the group row. The two statements are not wrapped
/// in a transaction.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  store
    .get_group(id)
    .await?
    .ok_or_else(|| ApiError::NotFound("Group not found".to_string()))?;

  let members = store.count_group_members(id).await?;
  if members > 0 {
    store.detach_group_members(id).await?;
  }
  store.delete_group(id).await?;

  Ok(Json(json!({
    "message": format!(
      "Group {id} deleted successfully. {members} contacts updated."
    )
  })))
}
