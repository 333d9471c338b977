//! Double hashing over a pluggable digest.
//!
//! Two digest passes give the base indices `a` and `b`; every further index
//! is `(a + b * i) mod capacity` (Kirsch and Mitzenmacher), so `k` indices
//! never cost more than two digests.

use crate::digest::DigestHash;
use crate::element::Element;

/// Truncating remainder shifted into `[0, capacity)`.
fn reduce(value: i128, capacity: usize) -> usize {
    let modulus = capacity as i128;
    let remainder = value % modulus;

    if remainder < 0 {
        (remainder + modulus) as usize
    } else {
        remainder as usize
    }
}

#[derive(Debug, Clone)]
pub struct IndexHasher<D> {
    digest: D,
    capacity: usize,
}

impl<D: DigestHash> IndexHasher<D> {
    /// `capacity` must be non-zero; it is the modulus of every index.
    pub fn new(digest: D, capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");

        IndexHasher { digest, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn digest(&self) -> &D {
        &self.digest
    }

    fn first_stage(&self, element: Element<'_>) -> i32 {
        self.digest.hash(&element.canonical_bytes())
    }

    fn second_stage(&self, first: i32) -> usize {
        reduce(
            self.digest.hash(first.to_string().as_bytes()) as i128,
            self.capacity,
        )
    }

    pub fn hash_a<'e>(&self, element: impl Into<Element<'e>>) -> usize {
        reduce(self.first_stage(element.into()) as i128, self.capacity)
    }

    /// Digests the decimal text of the first-stage hash.
    pub fn hash_b<'e>(&self, element: impl Into<Element<'e>>) -> usize {
        self.second_stage(self.first_stage(element.into()))
    }

    pub fn hash_at(&self, i: u32, a: usize, b: usize) -> usize {
        reduce(a as i128 + (b as i128) * (i as i128), self.capacity)
    }

    /// Yields the `count` indices for `element` in derivation order: `a`, `b`,
    /// then `hash_at(i, a, b)` for `i` in `3..=count`. The second digest is
    /// only computed once the iterator reaches it.
    pub fn indices<'e>(&self, element: impl Into<Element<'e>>, count: u32) -> Indices<'_, D> {
        let first = self.first_stage(element.into());

        Indices {
            hasher: self,
            first,
            a: reduce(first as i128, self.capacity),
            b: None,
            position: 1,
            count,
        }
    }
}

pub struct Indices<'h, D> {
    hasher: &'h IndexHasher<D>,
    first: i32,
    a: usize,
    b: Option<usize>,
    // Wider than `count` so stepping past `u32::MAX` cannot wrap.
    position: u64,
    count: u32,
}

impl<D: DigestHash> Iterator for Indices<'_, D> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.position > u64::from(self.count) {
            return None;
        }

        let hasher = self.hasher;
        let first = self.first;
        let index = match self.position {
            1 => self.a,
            i => {
                let b = *self.b.get_or_insert_with(|| hasher.second_stage(first));
                if i == 2 {
                    b
                } else {
                    // `i <= count`, so it fits.
                    hasher.hash_at(i as u32, self.a, b)
                }
            }
        };
        self.position += 1;

        Some(index)
    }

    fn nth(&mut self, n: usize) -> Option<usize> {
        self.position = self.position.saturating_add(n as u64);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.count) + 1).saturating_sub(self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl<D: DigestHash> ExactSizeIterator for Indices<'_, D> {}
