//! `StateNode`: an immutable search-tree node.
//!
//! Each node owns a shared handle to its parent, so the nodes of one search
//! form a tree rooted at the initial state. A node is freshly allocated on
//! every transition and never mutated; it is freed when the last frontier,
//! path or child handle to it is dropped.
//!
//! # Equality semantics
//!
//! `StateNode` intentionally does **not** implement `Eq` or `Hash`. Two nodes
//! reached through different paths are the same graph vertex when their
//! masks are equal: key visited sets by [`StateNode::mask`], never by node.

use std::rc::Rc;

use crate::carrier::index::{ActionId, PropId};
use crate::carrier::mask::PropMask;

/// Immutable search node: truth assignment plus lineage.
#[derive(Debug)]
pub struct StateNode {
    mask: PropMask,
    parent: Option<Rc<StateNode>>,
    action_used: Option<ActionId>,
    depth: u32,
}

impl StateNode {
    /// A root node with no parent.
    #[must_use]
    pub fn root(mask: PropMask) -> Rc<Self> {
        Rc::new(Self {
            mask,
            parent: None,
            action_used: None,
            depth: 0,
        })
    }

    /// A child of `parent` produced by applying `action`.
    #[must_use]
    pub fn child(parent: &Rc<Self>, action: ActionId, mask: PropMask) -> Rc<Self> {
        Rc::new(Self {
            mask,
            parent: Some(Rc::clone(parent)),
            action_used: Some(action),
            depth: parent.depth + 1,
        })
    }

    /// The truth assignment.
    #[must_use]
    pub fn mask(&self) -> &PropMask {
        &self.mask
    }

    /// True proposition ids, ascending.
    pub fn propositions(&self) -> impl Iterator<Item = PropId> + '_ {
        self.mask.iter()
    }

    /// The predecessor (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<StateNode>> {
        self.parent.as_ref()
    }

    /// The action that produced this node from its parent.
    #[must_use]
    pub fn action_used(&self) -> Option<ActionId> {
        self.action_used
    }

    /// Number of actions from the root.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The actions applied from the root to this node, in order.
    #[must_use]
    pub fn lineage(&self) -> Vec<ActionId> {
        let mut actions = Vec::with_capacity(self.depth as usize);
        let mut current = Some(self);
        while let Some(node) = current {
            if let Some(action) = node.action_used {
                actions.push(action);
            }
            current = node.parent.as_deref();
        }
        actions.reverse();
        actions
    }
}
