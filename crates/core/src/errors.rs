use thiserror::Error;

/// A product payload violated a field constraint. These map to HTTP 400 at the
/// interface layer and are never retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product name must not be blank")]
    BlankName,
    #[error("product name is {chars} characters, at most 30 allowed")]
    NameTooLong { chars: usize },
    #[error("image url is {chars} characters, at most 1000 allowed")]
    ImageUrlTooLong { chars: usize },
    #[error("price {price} is outside the accepted range 0..=1000000000")]
    PriceOutOfRange { price: i64 },
}
