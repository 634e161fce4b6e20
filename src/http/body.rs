use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;

use crate::application::normalize::{BodyFormat, RawBody};
use crate::http::types::ApiError;

/// Todo payload in whichever encoding the client declared.
pub struct TodoBody(pub RawBody);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for TodoBody {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = BodyFormat::from_content_type(req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()));
        match format {
            BodyFormat::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|r| ApiError { status: r.status(), error: r.body_text() })?;
                let value = serde_json::from_slice(&bytes).map_err(|e| {
                    tracing::debug!(error = %e, "rejecting malformed json body");
                    ApiError::bad_request("Invalid JSON body")
                })?;
                Ok(Self(RawBody::Json(value)))
            }
            BodyFormat::Multipart => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|r| ApiError { status: r.status(), error: r.body_text() })?;
                let mut fields = Vec::new();
                while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
                    let name = field.name().unwrap_or_default().to_string();
                    // file parts are read as text like any other field
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    fields.push((name, String::from_utf8_lossy(&bytes).into_owned()));
                }
                Ok(Self(RawBody::Fields(fields)))
            }
            BodyFormat::FormUrlEncoded => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|r| ApiError { status: r.status(), error: r.body_text() })?;
                let fields = form_urlencoded::parse(&bytes).into_owned().collect();
                Ok(Self(RawBody::Fields(fields)))
            }
            BodyFormat::PlainText => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|r| ApiError { status: r.status(), error: r.body_text() })?;
                Ok(Self(RawBody::Text(String::from_utf8_lossy(&bytes).into_owned())))
            }
        }
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::bad_request(e.to_string())
}
