//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body and validates it using the `validator`
/// crate's `Validate` trait. On failure, responds 400 with a single message
/// joining every violated constraint as `field: message` pairs, so the
/// client sees all violations at once. Field order is made deterministic by
/// sorting on field path (`validator` reports errors as an unordered map).
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 2))]
///     name: String,
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.name)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::BadRequest(join_violations(&e)).into_response())?;

        Ok(ValidatedJson(data))
    }
}

/// Flatten validation errors into a single "field: message" list.
fn join_violations(errors: &validator::ValidationErrors) -> String {
    let mut violations: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect();

    violations.sort();
    violations
        .into_iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{Router, body::Body, http::Request as HttpRequest, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(
            required(message = "is required"),
            length(min = 2, message = "must be at least 2 characters")
        )]
        name: Option<String>,
        #[validate(
            required(message = "is required"),
            email(message = "must be a valid email address")
        )]
        email: Option<String>,
    }

    async fn handler(ValidatedJson(payload): ValidatedJson<TestPayload>) -> String {
        format!(
            "{} <{}>",
            payload.name.unwrap_or_default(),
            payload.email.unwrap_or_default()
        )
    }

    fn app() -> Router {
        Router::new().route("/", post(handler))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_payload_passes_through() {
        let (status, body) =
            post_json(app(), r#"{"name":"Alice","email":"a@x.com"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Alice <a@x.com>");
    }

    #[tokio::test]
    async fn test_all_violations_joined_in_one_message() {
        let (status, body) = post_json(app(), r#"{"name":"A"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert!(error.message.contains("name: must be at least 2 characters"));
        assert!(error.message.contains("email: is required"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, _) = post_json(app(), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
