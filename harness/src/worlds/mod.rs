//! Built-in planning tasks used by tests, benchmarks and the CLI.
//!
//! Each world is a plain [`StripsTask`](crate::reader::StripsTask), so it can
//! be encoded directly or rendered to STRIPS text.

mod basic;
mod blocks;

pub use basic::{chain, pickup, unreachable};
pub use blocks::{blocks_reversal, BLOCKS_REVERSAL_3_OPTIMUM};

use crate::reader::StripsTask;

/// Look up a built-in world by name (`pickup`, `unreachable`, `chain-<n>`,
/// `blocks-<n>`).
#[must_use]
pub fn by_name(name: &str) -> Option<StripsTask> {
    match name {
        "pickup" => return Some(pickup()),
        "unreachable" => return Some(unreachable()),
        _ => {}
    }
    if let Some(n) = name.strip_prefix("chain-") {
        return n.parse().ok().map(chain);
    }
    if let Some(n) = name.strip_prefix("blocks-") {
        return n.parse().ok().filter(|&n| n >= 1).map(blocks_reversal);
    }
    None
}
