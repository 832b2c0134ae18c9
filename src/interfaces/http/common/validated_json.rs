//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. Malformed
//! bodies are rejected with 400, failed validation with 422.

use axum::extract::FromRequest;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use super::ApiError;

/// An extractor that deserializes JSON and validates it.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct AddItem {
///     product_id: i64,
///     #[validate(range(min = 1))]
///     quantity: i32,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<AddItem>) {
///     // `body.quantity` is at least 1 here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Flatten field errors, including those of nested structs and lists, into
/// `path: message` pairs.
fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for e in errs {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    out.push(format!("{}: {}", path, msg));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(format!("Invalid JSON: {}", rejection)))?;

        if let Err(errors) = value.validate() {
            let mut messages = Vec::new();
            collect_messages("", &errors, &mut messages);
            messages.sort();
            let message = if messages.is_empty() {
                "Validation failed".to_string()
            } else {
                messages.join("; ")
            };
            return Err(ApiError::Validation(message));
        }

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Line {
        #[validate(range(min = 1, message = "must be at least 1"))]
        quantity: i32,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Batch {
        #[validate(nested)]
        lines: Vec<Line>,
    }

    async fn handler(ValidatedJson(body): ValidatedJson<Batch>) -> String {
        body.lines.len().to_string()
    }

    async fn send(body: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = Router::new()
            .route("/test", post(handler))
            .oneshot(req)
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn valid_body_reaches_handler() {
        let (status, body) = send(r#"{"lines":[{"quantity":2},{"quantity":1}]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "2");
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let (status, _) = send("not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn nested_validation_failure_returns_422_with_path() {
        let (status, body) = send(r#"{"lines":[{"quantity":1},{"quantity":0}]}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("lines[1].quantity: must be at least 1"), "{}", body);
    }
}
