use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put, MethodFilter},
    Json, Router,
};
use common::types::Created;
use models::{Note, NoteInput};
use service::NoteStore;

use crate::errors::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::routes::method_not_allowed;

const NOT_FOUND: &str = "Note not found";

pub fn router(store: Arc<NoteStore>) -> Router {
    Router::new()
        .route(
            "/notes",
            get(list_notes)
                .post(create_note)
                .on(MethodFilter::HEAD, method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/notes/:id",
            put(update_note).delete(delete_note).fallback(method_not_allowed),
        )
        .with_state(store)
}

pub async fn list_notes(State(store): State<Arc<NoteStore>>) -> Json<Vec<Note>> {
    Json(store.get_all().await)
}

pub async fn create_note(
    State(store): State<Arc<NoteStore>>,
    JsonBody(input): JsonBody<NoteInput>,
) -> (StatusCode, Json<Created>) {
    let id = store.add(input).await;
    (StatusCode::CREATED, Json(Created { id }))
}

pub async fn update_note(
    State(store): State<Arc<NoteStore>>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<NoteInput>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id("note", &raw_id)?;
    if store.update(id, input).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(NOT_FOUND))
    }
}

pub async fn delete_note(
    State(store): State<Arc<NoteStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id("note", &raw_id)?;
    if store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(NOT_FOUND))
    }
}
