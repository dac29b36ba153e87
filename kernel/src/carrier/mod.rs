//! Carrier module: proposition ids, masks, literals, state nodes and goals.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod goal;
pub mod index;
pub mod literal;
pub mod mask;
pub mod state;
