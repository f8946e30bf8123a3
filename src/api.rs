//! Backend API Bindings
//!
//! HTTP wrappers around the two REST routes the server exposes.

use serde::Serialize;

use crate::models::Entry;

/// Create-entry request payload
#[derive(Serialize)]
pub struct CreateEntryArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Base URL of the backend, overridable at build time
fn api_base() -> String {
    option_env!("LEARN_LOG_API")
        .map(str::to_string)
        .unwrap_or_else(|| "http://localhost:3000".to_string())
}

fn entries_url() -> String {
    format!("{}/entries", api_base())
}

pub async fn list_entries() -> Result<Vec<Entry>, String> {
    let response = reqwest::get(entries_url())
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_entry(args: &CreateEntryArgs<'_>) -> Result<Entry, String> {
    let response = reqwest::Client::new()
        .post(entries_url())
        .json(args)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}
