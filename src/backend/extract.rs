/**
 * Request Extractors
 *
 * [`ApiJson`] reads a JSON request body and rejects with an [`ApiError`], so
 * body problems are rendered as envelope validation failures instead of
 * axum's plain-text rejections. An empty body reads as `{}`.
 */

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::backend::error::ApiError;

/// JSON body extractor with envelope rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await.map_err(|rejection| {
            ApiError::internal(
                "BytesRejection",
                rejection.body_text(),
                Some(i64::from(rejection.status().as_u16())),
            )
        })?;

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };
        let Json(value) = Json::<T>::from_bytes(body)?;
        Ok(Self(value))
    }
}
