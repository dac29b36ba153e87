//! `PropMask`: bit-packed truth assignment over proposition ids.
//!
//! A mask over `N` propositions occupies `ceil(N / 64)` words; for `N <= 64`
//! that is a single machine word. Masks are the dedup key of every search:
//! two states with equal masks are the same graph vertex, whatever node
//! objects carry them.
//!
//! # Layout
//!
//! Bit `i % 64` of word `i / 64` is proposition `i`. Bits at or above the
//! width are always zero, so derived `Eq`/`Hash` compare truth assignments.

use std::fmt;

use crate::carrier::index::PropId;

const WORD_BITS: usize = 64;

/// Fixed-width bitset over proposition ids.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropMask {
    width: usize,
    words: Box<[u64]>,
}

impl PropMask {
    /// All-false mask over `width` propositions.
    #[must_use]
    pub fn empty(width: usize) -> Self {
        Self {
            width,
            words: vec![0; width.div_ceil(WORD_BITS)].into_boxed_slice(),
        }
    }

    /// Mask with exactly the given ids set.
    ///
    /// # Panics
    ///
    /// Panics if any id is `>= width`.
    #[must_use]
    pub fn from_ids<I>(width: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = PropId>,
    {
        let mut mask = Self::empty(width);
        for id in ids {
            mask.insert(id);
        }
        mask
    }

    /// Number of propositions this mask ranges over.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Backing words, least significant proposition first.
    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Set one proposition true.
    ///
    /// # Panics
    ///
    /// Panics if `id >= width`.
    pub fn insert(&mut self, id: PropId) {
        assert!(
            id.index() < self.width,
            "proposition {id} outside mask width {}",
            self.width
        );
        self.words[id.index() / WORD_BITS] |= 1u64 << (id.index() % WORD_BITS);
    }

    /// Whether a proposition is true. Ids outside the width are false.
    #[must_use]
    pub fn contains(&self, id: PropId) -> bool {
        id.index() < self.width
            && self.words[id.index() / WORD_BITS] & (1u64 << (id.index() % WORD_BITS)) != 0
    }

    /// Number of true propositions.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether no proposition is true.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// `(self & other) == other`: every proposition of `other` is true here.
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        debug_assert_eq!(self.words.len(), other.words.len());
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(s, o)| s & o == *o)
    }

    /// `(self & other) == 0`: no proposition of `other` is true here.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        debug_assert_eq!(self.words.len(), other.words.len());
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(s, o)| s & o == 0)
    }

    /// `(self & !clear) | set`. Clearing happens first, so a proposition in
    /// both masks ends up true.
    #[must_use]
    pub fn clear_then_set(&self, clear: &Self, set: &Self) -> Self {
        debug_assert_eq!(self.words.len(), clear.words.len());
        debug_assert_eq!(self.words.len(), set.words.len());
        let words = self
            .words
            .iter()
            .zip(clear.words.iter())
            .zip(set.words.iter())
            .map(|((w, c), s)| (w & !c) | s)
            .collect();
        Self {
            width: self.width,
            words,
        }
    }

    /// True proposition ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PropId> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                #[allow(clippy::cast_possible_truncation)]
                Some(PropId::new((wi * WORD_BITS + bit) as u32))
            })
        })
    }

    /// Little-endian bytes of the backing words, for fingerprinting.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.words.len() * 8);
        for w in self.words.iter() {
            buf.extend_from_slice(&w.to_le_bytes());
        }
        buf
    }
}

impl fmt::Debug for PropMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
