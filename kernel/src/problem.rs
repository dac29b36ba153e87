//! `Problem`: the finalized, indexed input every search runs on.
//!
//! A problem bundles the proposition index, the encoded action table, the
//! initial truth assignment and the goal. It is immutable once built and
//! `Send + Sync`, so one instance can be shared by concurrent searches.

use std::rc::Rc;

use crate::carrier::goal::Goal;
use crate::carrier::index::PropositionIndex;
use crate::carrier::literal::Literal;
use crate::carrier::mask::PropMask;
use crate::carrier::state::StateNode;
use crate::error::EncodeError;
use crate::operators::action::{ActionTable, CostModel, SymbolicAction};
use crate::proof::hash::{canonical_hash, push_framed, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// An indexed planning problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    index: PropositionIndex,
    actions: ActionTable,
    initial: PropMask,
    goal: Goal,
}

impl Problem {
    /// Encode symbolic actions, initial literals and goal literals against
    /// `index`.
    ///
    /// Only positive initial literals are stored; negated and unknown initial
    /// atoms are dropped. See [`Goal::encode`] for goal handling.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DuplicateAction`] if two actions share a name.
    pub fn encode(
        index: PropositionIndex,
        actions: Vec<SymbolicAction>,
        initial: &[Literal],
        goal: &[Literal],
    ) -> Result<Self, EncodeError> {
        let actions = ActionTable::encode(actions, &index)?;
        let initial = PropMask::from_ids(
            index.len(),
            initial
                .iter()
                .filter(|l| !l.negated)
                .filter_map(|l| index.id(&l.atom)),
        );
        let goal = Goal::encode(&index, goal);
        Ok(Self {
            index,
            actions,
            initial,
            goal,
        })
    }

    /// Assemble a problem from already-encoded parts without checking them.
    ///
    /// Call [`Problem::validate`] before searching.
    #[must_use]
    pub fn from_parts(
        index: PropositionIndex,
        actions: ActionTable,
        initial: PropMask,
        goal: Goal,
    ) -> Self {
        Self {
            index,
            actions,
            initial,
            goal,
        }
    }

    /// Check that every mask ranges over the index's proposition count.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found as an [`EncodeError`].
    pub fn validate(&self) -> Result<(), EncodeError> {
        let width = self.index.len();
        if self.initial.width() != width {
            return Err(EncodeError::StateWidthMismatch {
                what: "initial state",
                expected: width,
                actual: self.initial.width(),
            });
        }
        if self.goal.mask().width() != width {
            return Err(EncodeError::StateWidthMismatch {
                what: "goal",
                expected: width,
                actual: self.goal.mask().width(),
            });
        }
        self.actions.validate(width)
    }

    #[must_use]
    pub fn index(&self) -> &PropositionIndex {
        &self.index
    }

    #[must_use]
    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    #[must_use]
    pub fn initial(&self) -> &PropMask {
        &self.initial
    }

    #[must_use]
    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Number of propositions.
    #[must_use]
    pub fn width(&self) -> usize {
        self.index.len()
    }

    /// A fresh root node for one search run.
    #[must_use]
    pub fn root(&self) -> Rc<StateNode> {
        StateNode::root(self.initial.clone())
    }

    /// Whether `node` satisfies the goal.
    #[must_use]
    pub fn is_goal(&self, node: &StateNode) -> bool {
        self.goal.is_satisfied_by(node.mask())
    }

    /// Action names from the root to `node`.
    #[must_use]
    pub fn plan_names(&self, node: &StateNode) -> Vec<String> {
        node.lineage()
            .into_iter()
            .filter_map(|id| self.actions.get(id))
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Cost of the path from the root to `node` under `model`.
    #[must_use]
    pub fn plan_cost(&self, node: &StateNode, model: CostModel) -> u64 {
        node.lineage()
            .into_iter()
            .filter_map(|id| self.actions.get(id))
            .map(|a| a.cost(model))
            .sum()
    }

    /// Content fingerprint binding reports to this exact problem.
    ///
    /// Hash = `canonical_hash(Problem, index_digest || action_digest ||
    /// initial_words || goal_words)`, each part length-framed.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        let mut index_bytes = Vec::new();
        for name in self.index.names() {
            push_framed(&mut index_bytes, name.as_bytes());
        }
        let index_digest = canonical_hash(HashDomain::PropositionIndex, &index_bytes);

        let mut action_bytes = Vec::new();
        for action in &self.actions {
            push_framed(&mut action_bytes, action.name().as_bytes());
            for mask in [
                action.pre_mask(),
                action.pre_neg_mask(),
                action.eff_pos_mask(),
                action.eff_neg_mask(),
            ] {
                push_framed(&mut action_bytes, &mask.to_le_bytes());
            }
        }
        let action_digest = canonical_hash(HashDomain::ActionTable, &action_bytes);

        let mut data = Vec::new();
        push_framed(&mut data, index_digest.as_str().as_bytes());
        push_framed(&mut data, action_digest.as_str().as_bytes());
        push_framed(&mut data, &self.initial.to_le_bytes());
        push_framed(&mut data, &self.goal.mask().to_le_bytes());
        for atom in self.goal.unknown_atoms() {
            push_framed(&mut data, atom.as_bytes());
        }
        canonical_hash(HashDomain::Problem, &data)
    }
}
