use thiserror::Error;

use crate::digest::DigestAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BloomError {
    #[error("capacity must be greater than 0")]
    ZeroCapacity,

    #[error("capacity {capacity} exceeds maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },

    #[error("number of hash functions must be greater than 0")]
    ZeroHashCount,

    #[error("unknown digest algorithm: {0}")]
    UnknownDigest(String),

    /// The algorithm exists but its cargo feature was not enabled.
    #[error("digest algorithm {0} is not available in this build")]
    DigestUnavailable(DigestAlgorithm),
}

pub type Result<T> = std::result::Result<T, BloomError>;
