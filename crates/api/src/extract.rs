//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use hbnb_core::validation::{self, JsonObject};

use crate::error::AppError;

/// A request body that must be a JSON object.
///
/// Rejects with `400 {"error": "Not a JSON"}` otherwise. Handlers that have to
/// look something up before validating the body take raw [`Bytes`] and call
/// [`JsonBody::parse`] themselves.
#[derive(Debug, Clone)]
pub struct JsonBody(pub JsonObject);

impl JsonBody {
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        Ok(Self(validation::parse_object(bytes)?))
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Self::parse(&bytes)
    }
}
