//! Operators module: action encoding and application.
//!
//! Depends on `carrier` only.

pub mod action;
pub mod apply;
