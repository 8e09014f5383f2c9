//! Catalog routes: the storefront and admin HTML pages plus the JSON write
//! surface for product administration.
//!
//! HTML Endpoints:
//! - `GET  /`               — storefront page
//! - `GET  /admin`          — admin page
//!
//! JSON API Endpoints:
//! - `POST   /product`      — create a product, 400 on field violations
//! - `PUT    /product`      — full-record update by id, 400 on field violations
//! - `DELETE /product/{id}` — delete by id

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::{info, warn};

use cartly_core::domain::product::{Product, ProductDraft, ProductId};
use cartly_db::{DbPool, ProductStore, SqlProductStore, StoreError};

#[derive(Clone)]
pub struct CatalogState {
    store: Arc<dyn ProductStore>,
    templates: Arc<Tera>,
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(rename = "image-url")]
    pub image_url: String,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "image-url")]
    pub image_url: String,
    pub price: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

#[derive(Debug, Serialize)]
pub struct CatalogError {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Initialize the Tera engine with the catalog templates, falling back to the
/// embedded copies when the filesystem templates are unavailable.
fn init_templates() -> Arc<Tera> {
    let mut tera = match Tera::new("templates/catalog/**/*") {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to load catalog templates from filesystem, using empty Tera instance");
            Tera::default()
        }
    };

    tera.add_raw_template(
        "index.html",
        include_str!("../../../templates/catalog/index.html"),
    )
    .ok();
    tera.add_raw_template(
        "admin.html",
        include_str!("../../../templates/catalog/admin.html"),
    )
    .ok();

    Arc::new(tera)
}

pub fn router(db_pool: DbPool) -> Router {
    router_with_store(Arc::new(SqlProductStore::new(db_pool)))
}

pub fn router_with_store(store: Arc<dyn ProductStore>) -> Router {
    Router::new()
        // HTML routes
        .route("/", get(storefront_page))
        .route("/admin", get(admin_page))
        // JSON API routes
        .route("/product", post(create_product).put(update_product))
        .route("/product/{id}", delete(delete_product))
        .with_state(CatalogState { store, templates: init_templates() })
}

// ---------------------------------------------------------------------------
// HTML Handlers
// ---------------------------------------------------------------------------

async fn storefront_page(
    State(state): State<CatalogState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    render_catalog_page(&state, "index.html").await
}

async fn admin_page(
    State(state): State<CatalogState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    render_catalog_page(&state, "admin.html").await
}

/// Both read routes fetch the full catalog and hand it to the template under
/// the `products` key; only the template differs.
async fn render_catalog_page(
    state: &CatalogState,
    template: &str,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let products = state.store.find_all().await.map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("<h1>Database Error</h1><p>{e}</p>")))
    })?;

    let mut context = Context::new();
    context.insert("products", &products);

    let page = state.templates.render(template, &context).map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("<h1>Template Error</h1><p>{e}</p>")))
    })?;

    Ok(Html(page))
}

// ---------------------------------------------------------------------------
// JSON Handlers
// ---------------------------------------------------------------------------

async fn create_product(
    State(state): State<CatalogState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<Json<Product>, (StatusCode, Json<CatalogError>)> {
    let draft = ProductDraft::new(body.name, body.image_url, body.price);
    draft.validate().map_err(validation_error)?;

    let product = state.store.insert(draft).await.map_err(store_error)?;
    info!(product_id = %product.id, name = %product.name, "product created");

    Ok(Json(product))
}

async fn update_product(
    State(state): State<CatalogState>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<UpdateResponse>, (StatusCode, Json<CatalogError>)> {
    let draft = ProductDraft::new(body.name, body.image_url, body.price);
    draft.validate().map_err(validation_error)?;

    let id = ProductId(body.id);
    let updated = state.store.update(draft.into_product(id)).await.map_err(store_error)?;
    if updated == 0 {
        // Absent id is a signal, not an error.
        info!(product_id = %id, "product update matched no rows");
    } else {
        info!(product_id = %id, "product updated");
    }

    Ok(Json(UpdateResponse { updated }))
}

async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<CatalogState>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<CatalogError>)> {
    let deleted = state.store.delete_by_id(ProductId(id)).await.map_err(store_error)?;
    info!(product_id = id, deleted, "product delete processed");

    Ok(Json(DeleteResponse { deleted }))
}

fn validation_error(
    error: cartly_core::ValidationError,
) -> (StatusCode, Json<CatalogError>) {
    (StatusCode::BAD_REQUEST, Json(CatalogError { error: error.to_string() }))
}

fn store_error(error: StoreError) -> (StatusCode, Json<CatalogError>) {
    warn!(error = %error, "product store operation failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(CatalogError { error: error.to_string() }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::Path, extract::State, http::StatusCode, Json};

    use cartly_core::domain::product::ProductId;
    use cartly_db::store::InMemoryProductStore;
    use cartly_db::ProductStore;

    use super::{
        admin_page, create_product, delete_product, init_templates, storefront_page,
        update_product, CatalogState, CreateProductRequest, UpdateProductRequest,
    };

    fn state() -> CatalogState {
        CatalogState { store: Arc::new(InMemoryProductStore::default()), templates: init_templates() }
    }

    fn create_request(name: &str, image_url: &str, price: i64) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            image_url: image_url.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn create_persists_and_returns_the_product() {
        let state = state();

        let Json(product) = create_product(
            State(state.clone()),
            Json(create_request("에밀", "emil.png", 1000)),
        )
        .await
        .expect("should succeed");

        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.name, "에밀");

        let stored = state.store.find_by_id(product.id).await.expect("find").expect("present");
        assert_eq!(stored, product);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields_with_bad_request() {
        let state = state();

        for request in [
            create_request(" ", "url", 1000),
            create_request(&"긴".repeat(31), "url", 1000),
            create_request("name", &"a".repeat(1001), 1000),
            create_request("name", "url", -1),
            create_request("name", "url", 1_000_000_001),
        ] {
            let (status, Json(body)) =
                create_product(State(state.clone()), Json(request)).await.expect_err("rejected");
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(!body.error.is_empty());
        }

        assert!(state.store.find_all().await.expect("find all").is_empty());
    }

    #[tokio::test]
    async fn update_changes_the_stored_record() {
        let state = state();
        let Json(product) = create_product(
            State(state.clone()),
            Json(create_request("에밀", "emil.png", 1000)),
        )
        .await
        .expect("create");

        let Json(response) = update_product(
            State(state.clone()),
            Json(UpdateProductRequest {
                id: product.id.0,
                name: "도이".to_string(),
                image_url: "doy.png".to_string(),
                price: 10000,
            }),
        )
        .await
        .expect("update");

        assert_eq!(response.updated, 1);
        let stored = state.store.find_by_id(product.id).await.expect("find").expect("present");
        assert_eq!(stored.name, "도이");
        assert_eq!(stored.image_url, "doy.png");
        assert_eq!(stored.price, 10000);
    }

    #[tokio::test]
    async fn update_with_absent_id_reports_zero_rows() {
        let Json(response) = update_product(
            State(state()),
            Json(UpdateProductRequest {
                id: 99,
                name: "ghost".to_string(),
                image_url: "ghost.png".to_string(),
                price: 1,
            }),
        )
        .await
        .expect("update");

        assert_eq!(response.updated, 0);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let state = state();
        let Json(product) = create_product(
            State(state.clone()),
            Json(create_request("에밀", "emil.png", 1000)),
        )
        .await
        .expect("create");

        let Json(response) =
            delete_product(Path(product.id.0), State(state.clone())).await.expect("delete");

        assert_eq!(response.deleted, 1);
        assert_eq!(state.store.find_by_id(product.id).await.expect("find"), None);
    }

    #[tokio::test]
    async fn pages_render_the_product_listing() {
        let state = state();
        create_product(State(state.clone()), Json(create_request("에밀", "emil.png", 1000)))
            .await
            .expect("create");

        let storefront = storefront_page(State(state.clone())).await.expect("render storefront");
        assert!(storefront.0.contains("에밀"));
        assert!(storefront.0.contains("emil.png"));

        let admin = admin_page(State(state)).await.expect("render admin");
        assert!(admin.0.contains("에밀"));
    }
}
