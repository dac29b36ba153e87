//! Shared fixtures for the benchmark suites.

use strips_harness::worlds;
use strips_kernel::problem::Problem;

/// A named problem the macro benchmarks run every algorithm on.
pub struct Regime {
    pub name: &'static str,
    pub problem: Problem,
}

/// Built-in world names used as benchmark regimes.
///
/// `unreachable` exercises the exhaustive no-plan path; the chain is deep
/// and narrow; the blocks towers branch.
pub const REGIME_WORLDS: [&str; 4] = ["blocks-3", "blocks-4", "chain-40", "unreachable"];

/// Encode a built-in world.
///
/// # Panics
///
/// Panics if `name` is not a built-in world or fails to encode. Benchmark
/// setup failures are fatal.
#[must_use]
pub fn prepare(name: &'static str) -> Regime {
    let task = worlds::by_name(name).unwrap_or_else(|| panic!("unknown world `{name}`"));
    let problem = task
        .into_problem()
        .unwrap_or_else(|e| panic!("world `{name}` failed to encode: {e}"));
    Regime { name, problem }
}

/// Every regime in [`REGIME_WORLDS`].
#[must_use]
pub fn regimes() -> Vec<Regime> {
    REGIME_WORLDS.into_iter().map(prepare).collect()
}
