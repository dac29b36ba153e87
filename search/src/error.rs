//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (plan found, no plan, depth limit, timeout) are expressed via
//! [`crate::outcome::SearchOutcome`] and always come with a report.

use strips_kernel::error::EncodeError;
use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No
/// `SearchReport` is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A policy value is outside its legal range.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// The problem's encoded data is inconsistent.
    #[error("malformed problem: {0}")]
    MalformedProblem(#[from] EncodeError),
}
