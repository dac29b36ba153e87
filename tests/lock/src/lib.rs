//! Shared fixtures for the behavioural lock tests.

pub mod fixtures;
