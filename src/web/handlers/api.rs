//! REST API handlers
//!
//! HTTP endpoints for the activity catalog and roster mutations. Store
//! errors surface as an error status plus a `{"detail": ...}` body; the
//! frontend shows the detail string verbatim.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::error::ActivityError;
use crate::traits::ActivityStore;
use crate::types::{Activity, EmailQuery};

/// Full catalog snapshot keyed by activity name.
pub async fn list_activities<S>(State(store): State<Arc<S>>) -> Json<BTreeMap<String, Activity>>
where
    S: ActivityStore,
{
    Json(store.snapshot().await)
}

/// Sign a student up for an activity - `POST /activities/{name}/signup`.
pub async fn signup_for_activity<S>(
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<Arc<S>>,
) -> (StatusCode, Json<Value>)
where
    S: ActivityStore,
{
    match store.signup(&activity, &query.email).await {
        Ok(message) => {
            info!("{}", message);
            (StatusCode::OK, Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!("Signup for '{}' rejected ({}): {}", activity, query.email, e);
            error_response(&e)
        }
    }
}

/// Remove a student from an activity roster - `DELETE
/// /activities/{name}/participants`.
pub async fn unregister_participant<S>(
    Path(activity): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<Arc<S>>,
) -> (StatusCode, Json<Value>)
where
    S: ActivityStore,
{
    match store.unregister(&activity, &query.email).await {
        Ok(message) => {
            info!("{}", message);
            (StatusCode::OK, Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!(
                "Unregister from '{}' rejected ({}): {}",
                activity, query.email, e
            );
            error_response(&e)
        }
    }
}

/// Health check endpoint.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn error_response(error: &ActivityError) -> (StatusCode, Json<Value>) {
    (
        error.status_code(),
        Json(json!({ "detail": error.to_string() })),
    )
}
