use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Longest accepted product name, counted in characters rather than bytes so
/// multibyte names get the same budget as ASCII ones.
pub const NAME_MAX_CHARS: usize = 30;
pub const IMAGE_URL_MAX_CHARS: usize = 1000;
pub const PRICE_MAX: i64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted catalog entry. The id is assigned by the store on insert and
/// never reused afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub price: i64,
}

impl Product {
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            price: self.price,
        }
    }
}

/// An unpersisted product payload, as submitted by a caller. Field constraints
/// are enforced here before anything reaches the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub image_url: String,
    pub price: i64,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        price: i64,
    ) -> Self {
        Self { name: name.into(), image_url: image_url.into(), price }
    }

    /// Checks all field constraints, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        let name_chars = self.name.chars().count();
        if name_chars > NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong { chars: name_chars });
        }
        let url_chars = self.image_url.chars().count();
        if url_chars > IMAGE_URL_MAX_CHARS {
            return Err(ValidationError::ImageUrlTooLong { chars: url_chars });
        }
        if self.price < 0 || self.price > PRICE_MAX {
            return Err(ValidationError::PriceOutOfRange { price: self.price });
        }
        Ok(())
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product { id, name: self.name, image_url: self.image_url, price: self.price }
    }
}
