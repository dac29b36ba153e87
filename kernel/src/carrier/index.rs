//! `PropositionIndex`: dense integer ids for proposition names, plus the
//! id newtypes shared by the rest of the kernel.
//!
//! Ids are assigned in sorted name order, so the same set of names always
//! produces the same mapping. The index is immutable after construction.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Dense proposition identifier in `[0, N)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropId(u32);

impl PropId {
    /// Construct from a raw index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index as `usize`, for slice addressing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl fmt::Display for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dense action identifier: position in the encoded action table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(u32);

impl ActionId {
    /// Construct from a raw index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index as `usize`, for slice addressing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable name ↔ id mapping for one problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropositionIndex {
    names: Vec<String>,
    ids: HashMap<String, PropId>,
}

impl PropositionIndex {
    /// Build an index from proposition names.
    ///
    /// Duplicates collapse and empty names are skipped. Ids follow sorted
    /// name order.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct names are supplied.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|n| !n.is_empty())
            .collect();
        let names: Vec<String> = sorted.into_iter().collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let raw = u32::try_from(i).expect("proposition count exceeds u32::MAX");
                (n.clone(), PropId(raw))
            })
            .collect();
        Self { names, ids }
    }

    /// Number of propositions (`N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index holds no propositions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up the id of a proposition name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<PropId> {
        self.ids.get(name).copied()
    }

    /// Look up the name of an id.
    #[must_use]
    pub fn name(&self, id: PropId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// All names in id order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resolve names to ids, dropping names the index does not know.
    ///
    /// The result is sorted and deduplicated.
    #[must_use]
    pub fn resolve_known<'a, I>(&self, names: I) -> Vec<PropId>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut ids: Vec<PropId> = names.into_iter().filter_map(|n| self.id(n)).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
