//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::middleware::{principal_middleware, AuthState};
use super::modules::{cart, customer, health, metrics, products, request_id};
use crate::application::{AccountService, CartService, ProductService};
use crate::domain::RepositoryProvider;

/// Documents the principal header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "principal",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("username"))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        customer::get_customer,
        cart::get_cart,
        cart::add_item,
        cart::add_items,
        cart::set_delivery,
        cart::clear_cart,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            products::ProductResponse,
            customer::CustomerResponse,
            cart::CartResponse,
            cart::CartItemResponse,
            cart::AddItemRequest,
            cart::AddItemsRequest,
            cart::DeliveryRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Products", description = "Product catalog"),
        (name = "Customer", description = "The calling account"),
        (name = "Cart", description = "Shopping cart of the calling account"),
    ),
    info(
        title = "Market Service API",
        description = "Product catalog and shopping cart REST API. The caller is identified by the `username` header."
    )
)]
pub struct ApiDoc;

/// Build the full HTTP router.
///
/// `metrics_handle` is `None` when no Prometheus recorder is installed;
/// `/metrics` is then not served.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    auth: AuthState,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let product_state = products::ProductState {
        service: Arc::new(ProductService::new(repos.clone())),
    };
    let customer_state = customer::CustomerState {
        accounts: Arc::new(AccountService::new(repos.clone())),
    };
    let cart_state = cart::CartState {
        service: Arc::new(CartService::new(repos.clone())),
    };
    let health_state = health::HealthState {
        repos,
        started_at: Arc::new(Instant::now()),
    };

    let product_routes = Router::new()
        .route("/", get(products::list_products))
        .route("/{id}", get(products::get_product))
        .with_state(product_state);

    let customer_routes = Router::new()
        .route("/", get(customer::get_customer))
        .with_state(customer_state);

    let cart_routes = Router::new()
        .route(
            "/",
            get(cart::get_cart)
                .put(cart::add_item)
                .delete(cart::clear_cart),
        )
        .route("/items", post(cart::add_items))
        .route("/delivery", put(cart::set_delivery))
        .with_state(cart_state);

    // Every /rest route sees a resolved principal
    let rest_routes = Router::new()
        .nest("/products", product_routes)
        .nest("/customer", customer_routes)
        .nest("/customer/cart", cart_routes)
        .layer(middleware::from_fn_with_state(auth, principal_middleware));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .route(
            "/health",
            get(health::health_check).with_state(health_state),
        )
        .nest("/rest", rest_routes);

    if let Some(handle) = metrics_handle {
        router = router.route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{HeaderName, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::seed::ADMIN_EMAIL;
    use crate::infrastructure::InMemoryStorage;

    const CUSTOMER: &str = "customer@market.local";

    fn app(storage: &InMemoryStorage) -> Router {
        let auth = AuthState::new(HeaderName::from_static("username"), ADMIN_EMAIL);
        create_api_router(Arc::new(storage.clone()), auth, None)
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            req = req.header("username", user);
        }
        let req = match body {
            Some(body) => req
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => req.body(Body::empty()).unwrap(),
        };

        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let storage = InMemoryStorage::seeded();
        let (status, body) = send(app(&storage), Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn list_products_returns_catalog_in_envelope() {
        let storage = InMemoryStorage::seeded();
        let (status, body) =
            send(app(&storage), Method::GET, "/rest/products", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let products = body["data"].as_array().unwrap();
        assert_eq!(products.len(), 11);
        assert_eq!(products[0]["productId"], 1);
        assert!(products[0].get("id").is_none());
        assert_eq!(products[0]["volumeMl"], 700);
    }

    #[tokio::test]
    async fn get_product_exposes_product_id() {
        let storage = InMemoryStorage::seeded();
        let (status, body) =
            send(app(&storage), Method::GET, "/rest/products/2", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["productId"], 2);
        assert_eq!(body["data"]["name"], "Lagavulin 16");
        assert!(body["data"].get("id").is_none());
    }

    #[tokio::test]
    async fn unknown_product_is_404() {
        let storage = InMemoryStorage::seeded();
        let (status, body) =
            send(app(&storage), Method::GET, "/rest/products/999", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Product"));
    }

    #[tokio::test]
    async fn customer_defaults_to_configured_principal() {
        let storage = InMemoryStorage::seeded();
        let (status, body) =
            send(app(&storage), Method::GET, "/rest/customer", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], ADMIN_EMAIL);

        let (_, body) = send(
            app(&storage),
            Method::GET,
            "/rest/customer",
            Some(CUSTOMER),
            None,
        )
        .await;
        assert_eq!(body["data"]["id"], 2);
    }

    #[tokio::test]
    async fn unknown_principal_is_404() {
        let storage = InMemoryStorage::seeded();
        let (status, _) = send(
            app(&storage),
            Method::GET,
            "/rest/customer/cart",
            Some("ghost@market.local"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(storage.cart_count(), 0);
    }

    #[tokio::test]
    async fn get_cart_creates_empty_cart() {
        let storage = InMemoryStorage::seeded();
        let (status, body) = send(
            app(&storage),
            Method::GET,
            "/rest/customer/cart",
            Some(CUSTOMER),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({"accountId": 2, "deliveryIncluded": false, "itemsCount": 0, "items": []})
        );
        assert_eq!(storage.cart_count(), 1);
    }

    #[tokio::test]
    async fn put_cart_adds_and_accumulates() {
        let storage = InMemoryStorage::seeded();
        let item = json!({"productId": 3, "quantity": 2});
        send(
            app(&storage),
            Method::PUT,
            "/rest/customer/cart",
            Some(CUSTOMER),
            Some(item.clone()),
        )
        .await;
        let (status, body) = send(
            app(&storage),
            Method::PUT,
            "/rest/customer/cart",
            Some(CUSTOMER),
            Some(item),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["itemsCount"], 4);
        assert_eq!(
            body["data"]["items"],
            json!([{"productId": 3, "productName": "Talisker 10", "quantity": 4}])
        );
    }

    #[tokio::test]
    async fn put_cart_with_unavailable_product_leaves_cart_unchanged() {
        let storage = InMemoryStorage::seeded();
        let (status, body) = send(
            app(&storage),
            Method::PUT,
            "/rest/customer/cart",
            Some(CUSTOMER),
            Some(json!({"productId": 8, "quantity": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["items"], json!([]));
    }

    #[tokio::test]
    async fn put_cart_with_unknown_product_is_404() {
        let storage = InMemoryStorage::seeded();
        let (status, _) = send(
            app(&storage),
            Method::PUT,
            "/rest/customer/cart",
            Some(CUSTOMER),
            Some(json!({"productId": 999, "quantity": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_cart_with_zero_quantity_is_422() {
        let storage = InMemoryStorage::seeded();
        let (status, body) = send(
            app(&storage),
            Method::PUT,
            "/rest/customer/cart",
            Some(CUSTOMER),
            Some(json!({"productId": 1, "quantity": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(storage.cart_save_count(), 0);
    }

    #[tokio::test]
    async fn post_items_skips_unknown_products() {
        let storage = InMemoryStorage::seeded();
        let (status, body) = send(
            app(&storage),
            Method::POST,
            "/rest/customer/cart/items",
            Some(CUSTOMER),
            Some(json!({"items": [
                {"productId": 2, "quantity": 1},
                {"productId": 999, "quantity": 5},
                {"productId": 1, "quantity": 2}
            ]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["productId"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(body["data"]["itemsCount"], 3);
    }

    #[tokio::test]
    async fn delivery_flag_survives_clear() {
        let storage = InMemoryStorage::seeded();
        send(
            app(&storage),
            Method::PUT,
            "/rest/customer/cart",
            None,
            Some(json!({"productId": 1, "quantity": 1})),
        )
        .await;
        let (_, body) = send(
            app(&storage),
            Method::PUT,
            "/rest/customer/cart/delivery",
            None,
            Some(json!({"included": true})),
        )
        .await;
        assert_eq!(body["data"]["deliveryIncluded"], true);

        let (status, body) = send(
            app(&storage),
            Method::DELETE,
            "/rest/customer/cart",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({"accountId": 1, "deliveryIncluded": true, "itemsCount": 0, "items": []})
        );
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let storage = InMemoryStorage::seeded();
        let req = Request::builder()
            .method(Method::PUT)
            .uri("/rest/customer/cart/delivery")
            .header("content-type", "application/json")
            .body(Body::from("{included"))
            .unwrap();
        let resp = app(&storage).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(storage.cart_save_count(), 0);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let storage = InMemoryStorage::seeded();
        let req = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = app(&storage).oneshot(req).await.unwrap();
        assert_eq!(resp.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn openapi_document_lists_cart_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/rest/customer/cart"));
        assert!(doc.paths.paths.contains_key("/rest/customer/cart/items"));
    }
}
