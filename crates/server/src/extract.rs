//! Request extractors shared by every service router.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// JSON request body that rejects with `400` and the decoder's message on any
/// failure. Unlike `axum::Json` it does not look at `Content-Type` and never
/// answers `415`/`422`.
///
/// Only the first JSON value is read; anything after it is ignored. A bare
/// `null` yields `T::default()`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        decode_first(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

fn decode_first<T>(bytes: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let first = serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Option<T>>()
        .next();
    let value = match first {
        Some(res) => res?,
        // empty or whitespace-only body: let the strict decoder report EOF
        None => serde_json::from_slice::<Option<T>>(bytes)?,
    };
    Ok(value.unwrap_or_default())
}

/// Item routes carry the ID as a raw path segment; only non-negative integers
/// are accepted.
pub fn parse_id(entity: &str, raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid {entity} id: {raw}")))
}
