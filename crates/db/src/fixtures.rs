//! Seed data for tests and local development.

use cartly_core::domain::product::{Product, ProductDraft};

use crate::store::{ProductStore, StoreError};

pub fn sample_drafts() -> Vec<ProductDraft> {
    vec![
        ProductDraft::new("에밀", "emil.png", 1000),
        ProductDraft::new("도이", "doy.png", 10000),
        ProductDraft::new("sprout seeds", "sprout.png", 300),
    ]
}

/// Inserts the sample catalog, returning the persisted records in order.
pub async fn seed_catalog(store: &dyn ProductStore) -> Result<Vec<Product>, StoreError> {
    let mut seeded = Vec::new();
    for draft in sample_drafts() {
        seeded.push(store.insert(draft).await?);
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::{sample_drafts, seed_catalog};
    use crate::store::{InMemoryProductStore, ProductStore};

    #[test]
    fn sample_drafts_satisfy_domain_constraints() {
        for draft in sample_drafts() {
            assert_eq!(draft.validate(), Ok(()), "draft: {draft:?}");
        }
    }

    #[tokio::test]
    async fn seed_catalog_persists_every_draft() {
        let store = InMemoryProductStore::default();
        let seeded = seed_catalog(&store).await.expect("seed");

        assert_eq!(seeded.len(), sample_drafts().len());
        assert_eq!(store.find_all().await.expect("find all"), seeded);
    }
}
