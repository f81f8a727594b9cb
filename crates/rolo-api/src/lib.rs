//! JSON REST API for the Rolo contact book.
//!
//! Exposes an axum [`Router`] backed by any [`rolo_core::store::ContactStore`].
//! Transport, TLS, and configuration concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = rolo_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod contacts;
pub mod error;
pub mod groups;

use std::sync::Arc;

use axum::{Router, routing::get};
use rolo_core::store::ContactStore;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

#[cfg(test)]
mod memory;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be served directly or nested into a parent
/// router regardless of its own state type. Collection routes keep their
/// trailing slash; axum matches paths exactly.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    // Contacts
    .route(
      "/contacts/",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete_one::<S>),
    )
    // Groups
    .route("/groups/", get(groups::list::<S>).post(groups::create::<S>))
    .route(
      "/groups/{id}",
      get(groups::get_one::<S>)
        .put(groups::update::<S>)
        .delete(groups::delete_one::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}
