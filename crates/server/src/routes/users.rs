use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, MethodFilter},
    Json, Router,
};
use common::types::Created;
use models::{User, UserInput};
use service::UserStore;

use crate::errors::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::routes::method_not_allowed;

pub fn router(store: Arc<UserStore>) -> Router {
    Router::new()
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .on(MethodFilter::HEAD, method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route("/users/:id", delete(delete_user).fallback(method_not_allowed))
        .with_state(store)
}

pub async fn list_users(State(store): State<Arc<UserStore>>) -> Json<Vec<User>> {
    Json(store.get_all().await)
}

pub async fn create_user(
    State(store): State<Arc<UserStore>>,
    JsonBody(input): JsonBody<UserInput>,
) -> (StatusCode, Json<Created>) {
    let id = store.add(input).await;
    (StatusCode::CREATED, Json(Created { id }))
}

pub async fn delete_user(
    State(store): State<Arc<UserStore>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id("user", &raw_id)?;
    if store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("User not found"))
    }
}
