use std::fmt;

use tracing::{debug, enabled, trace, Level};

use crate::config::check_dimensions;
use crate::digest::DigestHash;
#[cfg(any(
    feature = "sha256",
    feature = "shake128",
    feature = "blake3",
    feature = "xxh3"
))]
use crate::digest::DefaultDigest;
use crate::element::Element;
use crate::error::Result;
use crate::hashing::{IndexHasher, Indices};

/// A fixed-size Bloom filter.
///
/// `capacity` bits and `hash_count` hash functions are set at construction
/// and never change. Bits are only ever set, never cleared.
#[derive(Clone)]
pub struct BloomFilter<D> {
    bits: Vec<bool>,
    hash_count: u32,
    hasher: IndexHasher<D>,
}

#[cfg(any(
    feature = "sha256",
    feature = "shake128",
    feature = "blake3",
    feature = "xxh3"
))]
impl BloomFilter<DefaultDigest> {
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or above [`crate::MAX_CAPACITY`], or if
    /// `hash_count` is 0. Use [`BloomFilter::try_new`] to get an error instead.
    pub fn new(capacity: usize, hash_count: u32) -> Self {
        match Self::try_new(capacity, hash_count) {
            Ok(filter) => filter,
            Err(err) => panic!("invalid bloom filter parameters: {err}"),
        }
    }

    pub fn try_new(capacity: usize, hash_count: u32) -> Result<Self> {
        Self::with_digest(DefaultDigest::default(), capacity, hash_count)
    }
}

impl<D: DigestHash> BloomFilter<D> {
    pub fn with_digest(digest: D, capacity: usize, hash_count: u32) -> Result<Self> {
        check_dimensions(capacity, hash_count)?;

        debug!(
            capacity,
            hash_count,
            digest = digest.name(),
            "created bloom filter"
        );

        Ok(BloomFilter {
            bits: vec![false; capacity],
            hash_count,
            hasher: IndexHasher::new(digest, capacity),
        })
    }

    /// Sets the bit at every index derived for `element`.
    pub fn add<'e>(&mut self, element: impl Into<Element<'e>>) {
        let element = element.into();
        let traced = enabled!(Level::TRACE);
        let mut touched = Vec::new();

        for index in self.hasher.indices(element, self.hash_count) {
            self.bits[index] = true;
            if traced {
                touched.push(index);
            }
        }

        if traced {
            trace!(?element, indices = ?touched, "added element");
        }
    }

    /// Returns `false` if `element` was definitely never added.
    ///
    /// Indices are checked in derivation order and the first set bit answers
    /// `true`; the second digest is skipped when the first index already hits.
    pub fn test<'e>(&self, element: impl Into<Element<'e>>) -> bool {
        self.hasher
            .indices(element, self.hash_count)
            .any(|index| self.bits[index])
    }

    pub fn indices<'e>(&self, element: impl Into<Element<'e>>) -> Indices<'_, D> {
        self.hasher.indices(element, self.hash_count)
    }

    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }

    pub fn digest_name(&self) -> &str {
        self.hasher.digest().name()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn bits_set(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.contains(&true)
    }

    pub fn load_factor(&self) -> f64 {
        self.bits_set() as f64 / self.capacity() as f64
    }
}

impl<D: DigestHash> fmt::Debug for BloomFilter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("capacity", &self.bits.len())
            .field("hash_count", &self.hash_count)
            .field("bits_set", &self.bits_set())
            .field("digest", &self.digest_name())
            .finish()
    }
}

impl<D> fmt::Display for BloomFilter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "capacity: {} | num of hash functions: {}",
            self.bits.len(),
            self.hash_count
        )?;

        f.write_str("[ ")?;
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        f.write_str(" ]\n")
    }
}

impl<'e, D: DigestHash, E: Into<Element<'e>>> Extend<E> for BloomFilter<D> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for element in iter {
            self.add(element);
        }
    }
}
