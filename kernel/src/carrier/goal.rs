//! Goal condition: a set of propositions required true.
//!
//! Negative goal atoms are not supported at this layer. [`Goal::encode`]
//! drops them with a warning. A goal atom the index does not know makes the
//! goal unsatisfiable instead of being dropped.

use log::warn;

use crate::carrier::index::{PropId, PropositionIndex};
use crate::carrier::literal::Literal;
use crate::carrier::mask::PropMask;

/// Encoded goal condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    ids: Vec<PropId>,
    mask: PropMask,
    unknown_atoms: Vec<String>,
}

impl Goal {
    /// Goal requiring exactly `ids` true.
    ///
    /// # Panics
    ///
    /// Panics if any id is `>= width`.
    #[must_use]
    pub fn new(width: usize, ids: impl IntoIterator<Item = PropId>) -> Self {
        let mut ids: Vec<PropId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        let mask = PropMask::from_ids(width, ids.iter().copied());
        Self {
            ids,
            mask,
            unknown_atoms: Vec::new(),
        }
    }

    /// Encode symbolic goal literals against an index.
    #[must_use]
    pub fn encode(index: &PropositionIndex, literals: &[Literal]) -> Self {
        let mut ids = Vec::new();
        let mut unknown_atoms = Vec::new();
        for literal in literals {
            if literal.negated {
                warn!("negative goal atom `{literal}` is not supported and was dropped");
                continue;
            }
            match index.id(&literal.atom) {
                Some(id) => ids.push(id),
                None => unknown_atoms.push(literal.atom.clone()),
            }
        }
        if !unknown_atoms.is_empty() {
            warn!("goal references unknown atoms {unknown_atoms:?}; goal is unsatisfiable");
        }
        let mut goal = Self::new(index.len(), ids);
        goal.unknown_atoms = unknown_atoms;
        goal
    }

    /// Required proposition ids, ascending.
    #[must_use]
    pub fn ids(&self) -> &[PropId] {
        &self.ids
    }

    /// Required propositions as a mask.
    #[must_use]
    pub fn mask(&self) -> &PropMask {
        &self.mask
    }

    /// Goal atoms that were not in the index.
    #[must_use]
    pub fn unknown_atoms(&self) -> &[String] {
        &self.unknown_atoms
    }

    /// Whether no state can satisfy this goal under the current mapping.
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        !self.unknown_atoms.is_empty()
    }

    /// `goal ⊆ state`. Pure in `(self, state)`.
    #[must_use]
    pub fn is_satisfied_by(&self, state: &PropMask) -> bool {
        !self.is_unsatisfiable() && state.contains_all(&self.mask)
    }
}
