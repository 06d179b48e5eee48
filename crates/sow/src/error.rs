//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid plot dimensions, the two structured planning failures (no valid plants, capacity
//! exceeded), catalog lookups that cannot be recovered locally, and invalid catalog data.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid plot dimensions {width}x{height}: both must be > 0")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("no valid plants found in the request")]
    NoValidPlants,

    #[error("not enough space: need {required} sq ft, have {available} sq ft")]
    CapacityExceeded { required: f32, available: u64 },

    #[error("plant '{0}' not found")]
    UnknownKind(String),

    #[error("unknown hardiness zone '{0}'")]
    UnknownZone(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}
