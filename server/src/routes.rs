//! HTTP Routes
//!
//! The two-route REST surface: list all entries, create an entry.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::domain::{Entry, DESCRIPTION_MAX, TITLE_MAX};
use crate::error::{ApiError, FieldError};
use crate::repository::EntryStore;
use crate::state::AppState;

/// Create-entry request body
#[derive(Debug, Deserialize)]
pub struct CreateEntry {
    pub title: String,
    pub description: String,
}

/// `GET /entries`
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state.entries.list_all().await?;
    Ok(Json(entries))
}

/// `POST /entries`
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEntry>,
) -> Result<Json<Entry>, ApiError> {
    validate(&payload)?;

    let entry = state
        .entries
        .create(&payload.title, &payload.description)
        .await?;
    info!("recorded entry {}", entry.id);

    Ok(Json(entry))
}

/// Reject blank or over-length fields before they reach the store
///
/// Values are stored as received; only the blank check trims.
fn validate(payload: &CreateEntry) -> Result<(), ApiError> {
    let mut fields = Vec::new();

    if payload.title.trim().is_empty() {
        fields.push(FieldError::new("title", "must not be blank"));
    } else if payload.title.chars().count() > TITLE_MAX {
        fields.push(FieldError::new(
            "title",
            format!("must be at most {TITLE_MAX} characters"),
        ));
    }

    if payload.description.trim().is_empty() {
        fields.push(FieldError::new("description", "must not be blank"));
    } else if payload.description.chars().count() > DESCRIPTION_MAX {
        fields.push(FieldError::new(
            "description",
            format!("must be at most {DESCRIPTION_MAX} characters"),
        ));
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(fields))
    }
}
