//! STRIPS Search: uninformed and heuristic search over indexed problems.
//!
//! This crate provides the search layer. It depends only on `strips_kernel`;
//! it does NOT depend on `strips_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! strips_kernel  ←  strips_search  ←  strips_harness
//! (masks, actions)   (algorithms)      (reader, race, reports)
//! ```
//!
//! # Key types
//!
//! - [`search::search`] -- run one algorithm on one problem
//! - [`algorithm::Algorithm`] -- BFS, DLS, IDDFS, A*
//! - [`policy::SearchPolicy`] -- time budget, depth bound, cost model
//! - [`outcome::SearchReport`] -- outcome plus peak-size and counters
//! - [`heuristic::HeuristicContext`] -- relaxed cost propagation
//! - [`budget::CancelToken`] -- cooperative cancellation
//!
//! Every run is self-contained: its node tree, frontier and visited sets are
//! private to the calling thread, so runs on different threads share nothing
//! writable.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithm;
mod astar;
mod bfs;
pub mod budget;
mod dls;
pub mod error;
pub mod frontier;
pub mod governor;
pub mod heuristic;
pub mod meter;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;
