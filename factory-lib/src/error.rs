use crate::entities::Item;
use thiserror::Error;

pub type FactoryResult<T> = Result<T, FactoryError>;

/// Raised when a recipe is built from an invalid configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    #[error("Illegal inputs size: {0}")]
    IllegalInputsSize(usize),

    #[error("Recipe producing `{0}` must take at least one second")]
    ZeroTime(Item),

    #[error("Recipe quantity of `{0}` must be at least one")]
    ZeroAmount(Item),
}
