//! Principal resolution middleware for Axum
//!
//! Stand-in for real authentication: the principal is taken from a request
//! header, falling back to a configured default. Every request passes.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Header and fallback used to resolve the principal
#[derive(Clone, Debug)]
pub struct AuthState {
    pub principal_header: HeaderName,
    pub default_principal: String,
}

impl AuthState {
    pub fn new(principal_header: HeaderName, default_principal: impl Into<String>) -> Self {
        Self {
            principal_header,
            default_principal: default_principal.into(),
        }
    }

    fn resolve(&self, request: &Request<Body>) -> String {
        request
            .headers()
            .get(&self.principal_header)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| self.default_principal.clone())
    }
}

/// The caller as seen by handlers; `email` identifies the account
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Resolve the principal and store it in request extensions.
pub async fn principal_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let email = auth_state.resolve(&request);
    debug!(principal = %email, "Principal resolved");
    request
        .extensions_mut()
        .insert(AuthenticatedUser { email });
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use tower::ServiceExt;

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.email
    }

    async fn call(header: Option<&str>) -> String {
        let state = AuthState::new(HeaderName::from_static("username"), "fallback@market.local");
        let app = Router::new()
            .route("/", get(whoami))
            .layer(middleware::from_fn_with_state(state, principal_middleware));

        let mut req = Request::builder().uri("/");
        if let Some(value) = header {
            req = req.header("username", value);
        }
        let resp = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn header_value_becomes_principal() {
        assert_eq!(call(Some("someone@market.local")).await, "someone@market.local");
    }

    #[tokio::test]
    async fn missing_or_blank_header_uses_default() {
        assert_eq!(call(None).await, "fallback@market.local");
        assert_eq!(call(Some("   ")).await, "fallback@market.local");
    }
}
