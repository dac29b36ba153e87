//! Hash domain and fingerprint lock tests.
//!
//! Proves:
//! 1. Domain set has the expected count and unique, null-terminated bytes
//! 2. `canonical_hash` is SHA-256 over `domain || data`, checked independently
//! 3. Problem fingerprints are stable across encodings and sensitive to content

use std::collections::BTreeSet;

use sha2::{Digest, Sha256};
use strips_harness::reader::read_strips;
use strips_harness::worlds;
use strips_kernel::proof::hash::canonical_hash;
use strips_kernel::proof::hash_domain::HashDomain;

use lock_tests::fixtures::encode;

// ---------------------------------------------------------------------------
// 1. Domain set
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
    let unique: BTreeSet<&[u8]> = HashDomain::ALL.iter().map(HashDomain::as_bytes).collect();
    assert_eq!(unique.len(), HashDomain::ALL.len());
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"STRIPS::"), "{domain}");
        assert!(bytes.ends_with(b"::V1\0"), "{domain}");
    }
}

// ---------------------------------------------------------------------------
// 2. Independent digest
// ---------------------------------------------------------------------------

#[test]
fn canonical_hash_matches_independent_sha256() {
    let data = b"handempty";
    for &domain in HashDomain::ALL {
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(data);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
        assert_eq!(canonical_hash(domain, data).as_str(), expected, "{domain}");
    }
}

#[test]
fn domains_separate_identical_payloads() {
    let a = canonical_hash(HashDomain::ActionTable, b"x");
    let b = canonical_hash(HashDomain::Problem, b"x");
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// 3. Problem fingerprint
// ---------------------------------------------------------------------------

#[test]
fn fingerprint_survives_text_round_trip() {
    let task = worlds::blocks_reversal(3);
    let direct = encode(task.clone()).fingerprint();
    let reread = encode(read_strips(&task.to_strips_text()).unwrap()).fingerprint();
    assert_eq!(direct, reread);
    assert_eq!(direct.algorithm(), "sha256");
    assert_eq!(direct.hex_digest().len(), 64);
}

#[test]
fn fingerprint_tracks_initial_state() {
    let mut task = worlds::blocks_reversal(3);
    let original = encode(task.clone()).fingerprint();
    task.initial.pop();
    assert_ne!(encode(task).fingerprint(), original);
}
