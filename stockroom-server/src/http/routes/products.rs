//! Product endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::ProductRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{Product, ProductCreate, ProductUpdate, Window, WindowParams};

/// Plain confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /products/ - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<ProductCreate>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(state.pool()).insert(req).await?;
    Ok(Json(product))
}

/// GET /products/ - list products by skip/limit
async fn list_products(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<WindowParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let window = Window::from(params);
    let products = ProductRepo::new(state.pool()).list(window).await?;
    Ok(Json(products))
}

/// GET /products/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(state.pool()).get(id).await?;
    Ok(Json(product))
}

/// PUT /products/{id} - partial update
async fn update_product(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(changes): ValidJson<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(state.pool()).update(id, changes).await?;
    Ok(Json(product))
}

/// DELETE /products/{id}
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    ProductRepo::new(state.pool()).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}

/// Product routes. The collection answers with and without a trailing slash.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products/", get(list_products).post(create_product))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::{bootstrap, create_memory_pool};

    async fn app() -> Router {
        let pool = create_memory_pool().await.unwrap();
        bootstrap(&pool, true).await.unwrap();
        router().with_state(Arc::new(AppState::new(pool)))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn ids(v: &Value) -> Vec<i64> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn create_widget() {
        let app = app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/products/",
            Some(json!({"title": "Widget", "quantity": 3, "description": "a widget", "price": 9.99})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 11, "title": "Widget", "quantity": 3, "description": "a widget", "price": 9.99})
        );

        let (status, fetched) = send(&app, "GET", "/products/11", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn create_missing_field_is_422() {
        let app = app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/products/",
            Some(json!({"title": "Widget", "quantity": 3, "price": 9.99})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");

        let (_, listed) = send(&app, "GET", "/products/?limit=100", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn create_wrong_type_is_422() {
        let app = app().await;
        let (status, _) = send(
            &app,
            "POST",
            "/products",
            Some(json!({"title": "Widget", "quantity": "three", "description": "x", "price": 1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_without_content_type_is_422() {
        let app = app().await;
        let body = json!({"title": "Widget", "quantity": 3, "description": "a widget", "price": 9.99});
        let request = Request::builder()
            .method("POST")
            .uri("/products/")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "validation_error");

        let (_, listed) = send(&app, "GET", "/products/?limit=100", None).await;
        assert_eq!(ids(&listed), (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn list_pagination() {
        let app = app().await;

        let (status, all) = send(&app, "GET", "/products/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&all), (1..=10).collect::<Vec<_>>());

        let (_, tail) = send(&app, "GET", "/products/?skip=5&limit=10", None).await;
        assert_eq!(ids(&tail), (6..=10).collect::<Vec<_>>());

        let (_, empty) = send(&app, "GET", "/products/?skip=20&limit=10", None).await;
        assert!(empty.as_array().unwrap().is_empty());

        let (_, no_slash) = send(&app, "GET", "/products?limit=3", None).await;
        assert_eq!(ids(&no_slash), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn list_non_integer_query_is_422() {
        let app = app().await;
        let (status, body) = send(&app, "GET", "/products/?skip=abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn get_missing_is_404() {
        let app = app().await;
        let (status, body) = send(&app, "GET", "/products/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn non_integer_id_is_422() {
        let app = app().await;
        let (status, _) = send(&app, "GET", "/products/abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_is_partial() {
        let app = app().await;
        let (status, body) = send(&app, "PUT", "/products/2", Some(json!({"price": 2.5}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 2, "title": "Product 2", "quantity": 10, "description": "Description 2", "price": 2.5})
        );
    }

    #[tokio::test]
    async fn update_missing_is_404() {
        let app = app().await;
        let (status, body) = send(&app, "PUT", "/products/999", Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn update_wrong_type_is_422_and_leaves_record() {
        let app = app().await;
        let (status, body) = send(&app, "PUT", "/products/2", Some(json!({"quantity": "x"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");

        let (status, fetched) = send(&app, "GET", "/products/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            fetched,
            json!({"id": 2, "title": "Product 2", "quantity": 10, "description": "Description 2", "price": 20.0})
        );
    }

    #[tokio::test]
    async fn delete_then_gone() {
        let app = app().await;

        let (status, body) = send(&app, "DELETE", "/products/5", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Product deleted successfully"}));

        let (status, _) = send(&app, "GET", "/products/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/products/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "PUT", "/products/5", Some(json!({"quantity": 1}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
