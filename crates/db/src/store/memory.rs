use std::collections::BTreeMap;

use tokio::sync::RwLock;

use cartly_core::domain::product::{Product, ProductDraft, ProductId};

use super::{ProductStore, StoreError};

/// Map-backed store for tests and database-less wiring. Ids count up from 1
/// and are never reused, matching the SQL store's AUTOINCREMENT behavior.
#[derive(Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let product = draft.into_product(ProductId(inner.next_id));
        inner.products.insert(product.id.0, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.products.get_mut(&product.id.0) {
            Some(existing) => {
                *existing = product;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(&id.0).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(if inner.products.remove(&id.0).is_some() { 1 } else { 0 })
    }
}
