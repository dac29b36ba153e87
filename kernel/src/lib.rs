//! STRIPS kernel: the compact state and action encoding every search runs on.
//!
//! # API Surface
//!
//! - [`carrier::index::PropositionIndex`] -- dense, immutable proposition ids
//! - [`carrier::mask::PropMask`] -- bit-packed truth assignment
//! - [`operators::action::ActionTable`] -- one-shot action encoding
//! - [`operators::apply::successors`] -- one-step successor generation
//! - [`problem::Problem`] -- the finalized input handed to the search layer
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `problem`, and `proof` beside them.
//!
//! One-way only. No cycles. `carrier` depends on nothing internal.
//! The kernel never reads files or parses text.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod error;
pub mod operators;
pub mod problem;
pub mod proof;
