//! Request validation extractors
//!
//! Bodies and path ids are checked here, before a handler body runs or the
//! store is touched. Every shape failure becomes an [`ApiError`].

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;

/// Client message for path ids that are not valid identifiers
pub const INVALID_ID_MESSAGE: &str = "Invalid data.";

/// JSON body that has been deserialized and passed its `Validate` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Identifier taken from the route's single path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest(INVALID_ID_MESSAGE.to_string()))?;

        parse_id(&raw).map(Self)
    }
}

/// Parse a client-supplied identifier
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(INVALID_ID_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 2, max = 30))]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/probe")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let ValidatedJson(probe) =
            ValidatedJson::<Probe>::from_request(json_request(r#"{"name":"Ока"}"#), &())
                .await
                .unwrap();
        assert_eq!(probe.name, "Ока");
    }

    #[tokio::test]
    async fn test_rule_violation_is_validation_error() {
        let err = ValidatedJson::<Probe>::from_request(json_request(r#"{"name":"x"}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        for body in [r#"{"name":"#, r#"{}"#, r#"{"name":42}"#] {
            let err = ValidatedJson::<Probe>::from_request(json_request(body), &())
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_id("5f9b2c1e"),
            Err(ApiError::BadRequest(ref msg)) if msg == INVALID_ID_MESSAGE
        ));
    }
}
