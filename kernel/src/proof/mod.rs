//! Proof module: canonical hashing for problem fingerprints.

pub mod hash;
pub mod hash_domain;
