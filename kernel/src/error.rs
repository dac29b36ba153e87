//! Typed encoding errors.
//!
//! Unknown atoms are never errors: the encoder drops them from action
//! condition and effect sets. These variants cover data that would make the
//! search layer compute on inconsistent masks.

use thiserror::Error;

/// Typed failure for problem encoding and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Two actions share a name; names are the action key.
    #[error("duplicate action name `{name}`")]
    DuplicateAction { name: String },
    /// An action's masks were built for a different proposition count.
    #[error("action `{name}` is encoded over {actual} propositions, problem has {expected}")]
    ActionWidthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    /// An action record is stored at a position other than its id.
    #[error("action `{name}` is stored at position {position} under a different id")]
    ActionIdMismatch { name: String, position: usize },
    /// The initial state or goal mask was built for a different proposition count.
    #[error("{what} is encoded over {actual} propositions, problem has {expected}")]
    StateWidthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
