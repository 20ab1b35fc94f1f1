use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_not_positive")]
    PriceNotPositive,
    #[error("product.price_too_precise")]
    PriceTooPrecise,
    #[error("product.price_too_large")]
    PriceTooLarge,
    #[error("product.stock_negative")]
    StockNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("product.name_conflict")]
    NameConflict,
    #[error("product.internal")]
    Internal(#[source] RepositoryError),
}

impl ProductError {
    /// True for failures detected before the repository is reached.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameEmpty
                | ProductError::PriceNotPositive
                | ProductError::PriceTooPrecise
                | ProductError::PriceTooLarge
                | ProductError::StockNegative
        )
    }
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            RepositoryError::Conflict => ProductError::NameConflict,
            other => ProductError::Internal(other),
        }
    }
}
