//! STRIPS Harness: everything around the search core.
//!
//! The harness reads STRIPS text into symbolic tasks, builds the
//! proposition index, races algorithms against each other under hard
//! deadlines and renders the results.
//!
//! The harness does NOT implement search logic. It delegates to
//! `strips_search::search::search` and owns orchestration only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod race;
pub mod reader;
pub mod report;
pub mod worlds;
