use crate::digest::{DigestAlgorithm, DigestHash};
use crate::error::{BloomError, Result};
use crate::filter::BloomFilter;

/// Largest supported bit-vector length.
pub const MAX_CAPACITY: usize = i32::MAX as usize;

pub(crate) fn check_dimensions(capacity: usize, hash_count: u32) -> Result<()> {
    if capacity == 0 {
        return Err(BloomError::ZeroCapacity);
    }
    if capacity > MAX_CAPACITY {
        return Err(BloomError::CapacityTooLarge {
            capacity,
            max: MAX_CAPACITY,
        });
    }
    if hash_count == 0 {
        return Err(BloomError::ZeroHashCount);
    }

    Ok(())
}

/// Runtime description of a filter: its size, hash count and digest.
///
/// ```
/// use double_hash_bloom::{DigestAlgorithm, FilterConfig};
///
/// let mut filter = FilterConfig::new(50, 4)
///     .digest(DigestAlgorithm::Sha256)
///     .build()
///     .unwrap();
/// filter.add("a");
/// assert!(filter.test("a"));
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct FilterConfig {
    pub capacity: usize,
    pub hash_count: u32,
    pub digest: DigestAlgorithm,
}

impl FilterConfig {
    pub fn new(capacity: usize, hash_count: u32) -> Self {
        FilterConfig {
            capacity,
            hash_count,
            digest: DigestAlgorithm::default(),
        }
    }

    pub fn digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.capacity, self.hash_count)?;

        if !self.digest.is_available() {
            return Err(self.digest.unavailable());
        }

        Ok(())
    }

    pub fn build(&self) -> Result<BloomFilter<Box<dyn DigestHash>>> {
        check_dimensions(self.capacity, self.hash_count)?;
        let digest = self.digest.hasher()?;

        BloomFilter::with_digest(digest, self.capacity, self.hash_count)
    }
}
