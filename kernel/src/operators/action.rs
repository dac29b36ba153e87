//! Action encoding: symbolic actions reduced to index sets and masks.
//!
//! Encoding is a single step producing an immutable [`EncodedAction`] per
//! symbolic action. The symbolic sets are retained inside each record because
//! masks cannot be turned back into names without the index.
//!
//! Atoms missing from the [`PropositionIndex`] are silently dropped from
//! condition and effect sets. An unmapped atom is treated as irrelevant, not
//! as an error.

use std::collections::HashSet;

use log::debug;

use crate::carrier::index::{ActionId, PropId, PropositionIndex};
use crate::carrier::literal::Literal;
use crate::carrier::mask::PropMask;
use crate::error::EncodeError;

/// Edge-cost model for plan cost accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    /// Every action costs 1. Plan cost equals plan length.
    #[default]
    Unit,
    /// An action costs `1 + |positive effects|`.
    EffectWeighted,
}

impl CostModel {
    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::EffectWeighted => "effect-weighted",
        }
    }
}

/// A named action over proposition names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolicAction {
    pub name: String,
    /// Atoms that must be true.
    pub pre_pos: Vec<String>,
    /// Atoms that must be false.
    pub pre_neg: Vec<String>,
    /// Atoms forced true.
    pub eff_pos: Vec<String>,
    /// Atoms forced false.
    pub eff_neg: Vec<String>,
}

impl SymbolicAction {
    /// An action with no conditions or effects.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Split precondition and effect literals by polarity.
    #[must_use]
    pub fn from_literals(
        name: impl Into<String>,
        preconditions: &[Literal],
        effects: &[Literal],
    ) -> Self {
        let mut action = Self::new(name);
        for literal in preconditions {
            if literal.negated {
                action.pre_neg.push(literal.atom.clone());
            } else {
                action.pre_pos.push(literal.atom.clone());
            }
        }
        for literal in effects {
            if literal.negated {
                action.eff_neg.push(literal.atom.clone());
            } else {
                action.eff_pos.push(literal.atom.clone());
            }
        }
        action
    }

    /// Builder: require `atom` true.
    #[must_use]
    pub fn requires(mut self, atom: impl Into<String>) -> Self {
        self.pre_pos.push(atom.into());
        self
    }

    /// Builder: require `atom` false.
    #[must_use]
    pub fn forbids(mut self, atom: impl Into<String>) -> Self {
        self.pre_neg.push(atom.into());
        self
    }

    /// Builder: make `atom` true.
    #[must_use]
    pub fn adds(mut self, atom: impl Into<String>) -> Self {
        self.eff_pos.push(atom.into());
        self
    }

    /// Builder: make `atom` false.
    #[must_use]
    pub fn deletes(mut self, atom: impl Into<String>) -> Self {
        self.eff_neg.push(atom.into());
        self
    }

    /// Every atom this action mentions, with duplicates.
    pub fn atoms(&self) -> impl Iterator<Item = &String> {
        self.pre_pos
            .iter()
            .chain(&self.pre_neg)
            .chain(&self.eff_pos)
            .chain(&self.eff_neg)
    }
}

/// An action with its precomputed index sets and masks. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAction {
    id: ActionId,
    symbolic: SymbolicAction,
    pre_idx: Vec<PropId>,
    pre_neg_idx: Vec<PropId>,
    eff_pos_idx: Vec<PropId>,
    eff_neg_idx: Vec<PropId>,
    pre_mask: PropMask,
    pre_neg_mask: PropMask,
    eff_pos_mask: PropMask,
    eff_neg_mask: PropMask,
}

impl EncodedAction {
    /// Encode one symbolic action against an index.
    #[must_use]
    pub fn encode(id: ActionId, symbolic: SymbolicAction, index: &PropositionIndex) -> Self {
        let width = index.len();
        let pre_idx = index.resolve_known(&symbolic.pre_pos);
        let pre_neg_idx = index.resolve_known(&symbolic.pre_neg);
        let eff_pos_idx = index.resolve_known(&symbolic.eff_pos);
        let eff_neg_idx = index.resolve_known(&symbolic.eff_neg);

        let dropped = symbolic.atoms().filter(|a| index.id(a).is_none()).count();
        if dropped > 0 {
            debug!(
                "action `{}`: dropped {dropped} atom(s) absent from the proposition index",
                symbolic.name
            );
        }

        Self {
            id,
            pre_mask: PropMask::from_ids(width, pre_idx.iter().copied()),
            pre_neg_mask: PropMask::from_ids(width, pre_neg_idx.iter().copied()),
            eff_pos_mask: PropMask::from_ids(width, eff_pos_idx.iter().copied()),
            eff_neg_mask: PropMask::from_ids(width, eff_neg_idx.iter().copied()),
            symbolic,
            pre_idx,
            pre_neg_idx,
            eff_pos_idx,
            eff_neg_idx,
        }
    }

    #[must_use]
    pub fn id(&self) -> ActionId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.symbolic.name
    }

    /// The symbolic sets this record was encoded from.
    #[must_use]
    pub fn symbolic(&self) -> &SymbolicAction {
        &self.symbolic
    }

    /// Positive precondition ids, ascending and unique.
    #[must_use]
    pub fn pre_idx(&self) -> &[PropId] {
        &self.pre_idx
    }

    #[must_use]
    pub fn pre_neg_idx(&self) -> &[PropId] {
        &self.pre_neg_idx
    }

    #[must_use]
    pub fn eff_pos_idx(&self) -> &[PropId] {
        &self.eff_pos_idx
    }

    #[must_use]
    pub fn eff_neg_idx(&self) -> &[PropId] {
        &self.eff_neg_idx
    }

    #[must_use]
    pub fn pre_mask(&self) -> &PropMask {
        &self.pre_mask
    }

    #[must_use]
    pub fn pre_neg_mask(&self) -> &PropMask {
        &self.pre_neg_mask
    }

    #[must_use]
    pub fn eff_pos_mask(&self) -> &PropMask {
        &self.eff_pos_mask
    }

    #[must_use]
    pub fn eff_neg_mask(&self) -> &PropMask {
        &self.eff_neg_mask
    }

    /// Number of propositions the masks range over.
    #[must_use]
    pub fn width(&self) -> usize {
        self.pre_mask.width()
    }

    /// Edge weight under `model`.
    #[must_use]
    pub fn cost(&self, model: CostModel) -> u64 {
        match model {
            CostModel::Unit => 1,
            CostModel::EffectWeighted => 1 + self.eff_pos_idx.len() as u64,
        }
    }

    fn masks_have_width(&self, width: usize) -> bool {
        [
            &self.pre_mask,
            &self.pre_neg_mask,
            &self.eff_pos_mask,
            &self.eff_neg_mask,
        ]
        .iter()
        .all(|m| m.width() == width)
    }
}

/// The encoded actions of one problem, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionTable {
    actions: Vec<EncodedAction>,
}

impl ActionTable {
    /// Encode every symbolic action exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DuplicateAction`] if two actions share a name.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` actions are supplied.
    pub fn encode(
        symbolic: Vec<SymbolicAction>,
        index: &PropositionIndex,
    ) -> Result<Self, EncodeError> {
        let mut seen = HashSet::with_capacity(symbolic.len());
        for action in &symbolic {
            if !seen.insert(action.name.as_str()) {
                return Err(EncodeError::DuplicateAction {
                    name: action.name.clone(),
                });
            }
        }
        let actions = symbolic
            .into_iter()
            .enumerate()
            .map(|(i, action)| {
                let raw = u32::try_from(i).expect("action count exceeds u32::MAX");
                EncodedAction::encode(ActionId::new(raw), action, index)
            })
            .collect();
        Ok(Self { actions })
    }

    /// Assemble a table from already-encoded records.
    ///
    /// Records keep the ids they were encoded with; [`ActionTable::validate`]
    /// checks them against their positions.
    #[must_use]
    pub fn from_encoded(actions: Vec<EncodedAction>) -> Self {
        Self { actions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&EncodedAction> {
        self.actions.get(id.index())
    }

    /// Actions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, EncodedAction> {
        self.actions.iter()
    }

    /// Check every record against the problem width and its table position.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::ActionWidthMismatch`] for a record whose masks
    /// range over a different proposition count, and
    /// [`EncodeError::ActionIdMismatch`] for a record stored at the wrong
    /// position.
    pub fn validate(&self, width: usize) -> Result<(), EncodeError> {
        for (position, action) in self.actions.iter().enumerate() {
            if !action.masks_have_width(width) {
                return Err(EncodeError::ActionWidthMismatch {
                    name: action.name().to_string(),
                    expected: width,
                    actual: action.width(),
                });
            }
            if action.id.index() != position {
                return Err(EncodeError::ActionIdMismatch {
                    name: action.name().to_string(),
                    position,
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ActionTable {
    type Item = &'a EncodedAction;
    type IntoIter = std::slice::Iter<'a, EncodedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
