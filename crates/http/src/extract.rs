//! Request extractors shared by the site modules

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been decoded and then checked with [`Validate`].
///
/// Rejections come back as [`AppError`], so malformed bodies and failing
/// fields share the site error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 2))]
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(body: &'static str) -> Result<ValidatedJson<Payload>, AppError> {
        ValidatedJson::<Payload>::from_request(json_request(body), &()).await
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let ValidatedJson(payload) = extract(r#"{"name": "Sara"}"#).await.unwrap();
        assert_eq!(payload.name, "Sara");
    }

    #[tokio::test]
    async fn failing_field_is_unprocessable() {
        let err = extract(r#"{"name": "S"}"#).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_field_is_unprocessable() {
        let err = extract(r#"{}"#).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn broken_json_is_bad_request() {
        let err = extract(r#"{"name": "#).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
