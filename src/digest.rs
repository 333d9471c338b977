//! Digest backends that turn a byte string into a signed 32-bit hash.
//!
//! Every backend computes a digest of the input and folds the digest bytes
//! with [`text_hash`]. Backends are compiled in per cargo feature; the
//! [`DigestAlgorithm`] selector reports which ones a build carries.

use std::fmt;
use std::str::FromStr;

use crate::error::{BloomError, Result};

/// Produces a deterministic integer hash of a byte sequence.
pub trait DigestHash {
    fn hash(&self, bytes: &[u8]) -> i32;

    fn name(&self) -> &str;
}

impl<D: DigestHash + ?Sized> DigestHash for &D {
    fn hash(&self, bytes: &[u8]) -> i32 {
        (**self).hash(bytes)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<D: DigestHash + ?Sized> DigestHash for Box<D> {
    fn hash(&self, bytes: &[u8]) -> i32 {
        (**self).hash(bytes)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Polynomial string hash (`h = 31 * h + b`) over signed bytes, wrapping on overflow.
pub fn text_hash(bytes: &[u8]) -> i32 {
    bytes
        .iter()
        .fold(0i32, |h, &b| h.wrapping_mul(31).wrapping_add(b as i8 as i32))
}

#[cfg(feature = "sha256")]
use sha2::{Digest, Sha256};
#[cfg(feature = "sha256")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Digest;

#[cfg(feature = "sha256")]
impl DigestHash for Sha256Digest {
    fn hash(&self, bytes: &[u8]) -> i32 {
        text_hash(&Sha256::digest(bytes))
    }

    fn name(&self) -> &str {
        "sha256"
    }
}

#[cfg(feature = "shake128")]
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128,
};
#[cfg(feature = "shake128")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Shake128Digest;

#[cfg(feature = "shake128")]
impl DigestHash for Shake128Digest {
    fn hash(&self, bytes: &[u8]) -> i32 {
        let mut hasher = Shake128::default();
        hasher.update(bytes);
        let mut reader = hasher.finalize_xof();
        let mut res = [0u8; 32];
        reader.read(&mut res);

        text_hash(&res)
    }

    fn name(&self) -> &str {
        "shake128"
    }
}

#[cfg(feature = "blake3")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake3Digest;

#[cfg(feature = "blake3")]
impl DigestHash for Blake3Digest {
    fn hash(&self, bytes: &[u8]) -> i32 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(bytes);
        let mut reader = hasher.finalize_xof();
        let mut res = [0u8; 32];
        reader.fill(&mut res);

        text_hash(&res)
    }

    fn name(&self) -> &str {
        "blake3"
    }
}

/// Not cryptographic. Useful where speed matters more than independence.
#[cfg(feature = "xxh3")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Xxh3Digest;

#[cfg(feature = "xxh3")]
impl DigestHash for Xxh3Digest {
    fn hash(&self, bytes: &[u8]) -> i32 {
        text_hash(&xxh3::hash64_with_seed(bytes, 0).to_le_bytes())
    }

    fn name(&self) -> &str {
        "xxh3"
    }
}

#[cfg(feature = "sha256")]
pub type DefaultDigest = Sha256Digest;
#[cfg(all(not(feature = "sha256"), feature = "shake128"))]
pub type DefaultDigest = Shake128Digest;
#[cfg(all(not(feature = "sha256"), not(feature = "shake128"), feature = "blake3"))]
pub type DefaultDigest = Blake3Digest;
#[cfg(all(
    not(feature = "sha256"),
    not(feature = "shake128"),
    not(feature = "blake3"),
    feature = "xxh3"
))]
pub type DefaultDigest = Xxh3Digest;

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Shake128,
    Blake3,
    Xxh3,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Shake128,
        DigestAlgorithm::Blake3,
        DigestAlgorithm::Xxh3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Shake128 => "shake128",
            DigestAlgorithm::Blake3 => "blake3",
            DigestAlgorithm::Xxh3 => "xxh3",
        }
    }

    pub fn is_available(&self) -> bool {
        match self {
            DigestAlgorithm::Sha256 => cfg!(feature = "sha256"),
            DigestAlgorithm::Shake128 => cfg!(feature = "shake128"),
            DigestAlgorithm::Blake3 => cfg!(feature = "blake3"),
            DigestAlgorithm::Xxh3 => cfg!(feature = "xxh3"),
        }
    }

    /// Returns a fresh backend for this algorithm, or
    /// [`BloomError::DigestUnavailable`] when its feature is disabled.
    pub fn hasher(&self) -> Result<Box<dyn DigestHash>> {
        match self {
            #[cfg(feature = "sha256")]
            DigestAlgorithm::Sha256 => Ok(Box::new(Sha256Digest)),
            #[cfg(feature = "shake128")]
            DigestAlgorithm::Shake128 => Ok(Box::new(Shake128Digest)),
            #[cfg(feature = "blake3")]
            DigestAlgorithm::Blake3 => Ok(Box::new(Blake3Digest)),
            #[cfg(feature = "xxh3")]
            DigestAlgorithm::Xxh3 => Ok(Box::new(Xxh3Digest)),
            #[allow(unreachable_patterns)]
            other => Err(other.unavailable()),
        }
    }

    pub(crate) fn unavailable(&self) -> BloomError {
        tracing::warn!(digest = self.as_str(), "digest backend not compiled in");
        BloomError::DigestUnavailable(*self)
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = BloomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "shake128" | "shake-128" => Ok(DigestAlgorithm::Shake128),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            "xxh3" => Ok(DigestAlgorithm::Xxh3),
            _ => Err(BloomError::UnknownDigest(s.to_string())),
        }
    }
}
