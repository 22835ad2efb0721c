//! Journal handlers
//!
//! The journal page (HTML, or JSON via content negotiation) and the entry
//! creation endpoint behind the page's form.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::domain::entities::NewEntry;
use crate::domain::ports::EntryRepository;
use crate::error::AppError;
use crate::view::render_page;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET /
///
/// Returns the journal grouped by week and category.
/// - Accept: application/json → JSON week buckets
/// - Otherwise → the server-rendered page (form + weeks)
pub async fn get_journal<ER>(
    State(state): State<AppState<ER>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    ER: EntryRepository + 'static,
{
    let weeks = state.journal.weekly_view().await?;

    if wants_json(&headers) {
        Ok(Json(weeks).into_response())
    } else {
        Ok(Html(render_page(&weeks)).into_response())
    }
}

/// Form body for POST /entries
#[derive(Deserialize)]
pub struct CreateEntryRequest {
    pub date: Option<String>,
    pub category: Option<String>,
    pub text: Option<String>,
}

/// POST /entries
///
/// Create an entry from the page's form submission, then redirect back to
/// the journal. Missing or malformed fields are rejected with 400 before
/// anything reaches the store.
pub async fn create_entry<ER>(
    State(state): State<AppState<ER>>,
    Form(form): Form<CreateEntryRequest>,
) -> Result<Redirect, AppError>
where
    ER: EntryRepository + 'static,
{
    let date = form
        .date
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("missing field: date".to_string()))?;
    let category = form
        .category
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("missing field: category".to_string()))?;
    let text = form
        .text
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("missing field: text".to_string()))?;

    let new_entry = NewEntry::parse(date, category, text)?;
    state.journal.create_entry(new_entry).await?;

    Ok(Redirect::to("/"))
}
