use sqlx::Row;

use cartly_core::domain::product::{Product, ProductDraft, ProductId};

use super::{ProductStore, StoreError};
use crate::DbPool;

pub struct SqlProductStore {
    pool: DbPool,
}

impl SqlProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn product_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Product, StoreError> {
    Ok(Product {
        id: ProductId(
            row.try_get("id").map_err(|e| StoreError::Decode(format!("products.id: {e}")))?,
        ),
        name: row
            .try_get("name")
            .map_err(|e| StoreError::Decode(format!("products.name: {e}")))?,
        image_url: row
            .try_get("image_url")
            .map_err(|e| StoreError::Decode(format!("products.image_url: {e}")))?,
        price: row
            .try_get("price")
            .map_err(|e| StoreError::Decode(format!("products.price: {e}")))?,
    })
}

#[async_trait::async_trait]
impl ProductStore for SqlProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let result = sqlx::query("INSERT INTO products (name, image_url, price) VALUES (?, ?, ?)")
            .bind(&draft.name)
            .bind(&draft.image_url)
            .bind(draft.price)
            .execute(&self.pool)
            .await?;

        Ok(draft.into_product(ProductId(result.last_insert_rowid())))
    }

    async fn update(&self, product: Product) -> Result<u64, StoreError> {
        let result =
            sqlx::query("UPDATE products SET name = ?, image_url = ?, price = ? WHERE id = ?")
                .bind(&product.name)
                .bind(&product.image_url)
                .bind(product.price)
                .bind(product.id.0)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query("SELECT id, name, image_url, price FROM products WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query("SELECT id, name, image_url, price FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(product_from_row).collect()
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<u64, StoreError> {
        let result =
            sqlx::query("DELETE FROM products WHERE id = ?").bind(id.0).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
