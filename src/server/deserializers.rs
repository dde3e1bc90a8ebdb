use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::error::ApiError;

pub fn first_page() -> i64 {
    1
}

// `?page=abc` behaves like a missing page instead of rejecting the request
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or_else(first_page))
}

/// JSON body extractor that separates a broken envelope (bad request) from
/// fields that do not fit the expected shape (unprocessable).
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {rejection}");
                ApiError::BadRequest
            })?;
        serde_json::from_value(value).map(Payload).map_err(|error| {
            tracing::debug!("Unprocessable request body: {error}");
            ApiError::Unprocessable
        })
    }
}
