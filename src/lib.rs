//! A fixed-size Bloom filter for integer and text elements.
//!
//! Each element is digested twice: once over its canonical bytes (UTF-8 for
//! text, decimal text for integers) and once over the decimal text of that
//! first hash. The two results seed double hashing, which derives the
//! remaining indices without further digests.
//!
//! ```
//! use double_hash_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(50, 4);
//! for i in 1..=10 {
//!     filter.add(i);
//! }
//! filter.add("a");
//!
//! assert!(filter.test(7));
//! assert!(filter.test("a"));
//! print!("{filter}");
//! ```
//!
//! The digest is pluggable through [`DigestHash`]; cargo features pick which
//! backends are compiled in (`sha256` by default, plus `shake128`, `blake3`
//! and `xxh3`).

pub mod config;
pub mod digest;
pub mod element;
pub mod error;
pub mod filter;
pub mod hashing;

#[cfg(test)]
mod test_support;

pub use config::{FilterConfig, MAX_CAPACITY};
pub use digest::{text_hash, DigestAlgorithm, DigestHash};
pub use element::Element;
pub use error::{BloomError, Result};
pub use filter::BloomFilter;
pub use hashing::{IndexHasher, Indices};
