//! Augmentation error types.

use thiserror::Error;

/// Augmentation errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A temperature scale name was not recognized.
    #[error("unknown temperature scale '{0}' (expected celsius, fahrenheit or kelvin)")]
    UnknownScale(String),
}

pub type Result<T> = std::result::Result<T, Error>;
