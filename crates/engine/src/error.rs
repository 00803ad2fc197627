//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidQuantity`] thrown when a flat fee would be amortized over zero
//!   pieces.
//! - [`InvalidCuttingSpeed`] thrown when the cutting speed is not positive.
//! - [`MaterialNotFound`] thrown when a product name has no catalog entry.
//!
//!  [`InvalidQuantity`]: EngineError::InvalidQuantity
//!  [`InvalidCuttingSpeed`]: EngineError::InvalidCuttingSpeed
//!  [`MaterialNotFound`]: EngineError::MaterialNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("Invalid cutting speed: {0}")]
    InvalidCuttingSpeed(String),
    #[error("\"{0}\" material not found!")]
    MaterialNotFound(String),
}
