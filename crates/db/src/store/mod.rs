use async_trait::async_trait;
use thiserror::Error;

use cartly_core::domain::product::{Product, ProductDraft, ProductId};

pub mod memory;
pub mod sql;

pub use memory::InMemoryProductStore;
pub use sql::SqlProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Persistence contract for the product catalog. A `None`/zero-row outcome for
/// an absent id is a signal, not an error; only backend failures surface as
/// `StoreError`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists a new record and returns it with the id the store assigned.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Replaces the record matching `product.id`, returning rows affected.
    async fn update(&self, product: Product) -> Result<u64, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Full snapshot in storage (ascending id) order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn delete_by_id(&self, id: ProductId) -> Result<u64, StoreError>;
}
