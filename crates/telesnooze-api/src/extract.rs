use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that ignores `Content-Type` and rejects with the
/// `{"error": ...}` envelope instead of axum's default rejection text.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        serde_json::from_slice(&body)
            .map(Payload)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
