//! Blocks world: reverse a tower.
//!
//! Blocks `b1..bn` start stacked `b1` on `b2` on ... on `bn` on the table
//! and must end stacked the other way round. Four operators: `pickup`,
//! `putdown`, `stack`, `unstack`.

use strips_kernel::carrier::literal::Literal;
use strips_kernel::operators::action::SymbolicAction;

use crate::reader::StripsTask;

/// Shortest plan length for `blocks_reversal(3)`.
pub const BLOCKS_REVERSAL_3_OPTIMUM: usize = 6;

fn block(i: usize) -> String {
    format!("b{i}")
}

fn on(x: &str, y: &str) -> String {
    format!("on-{x}-{y}")
}

fn ontable(x: &str) -> String {
    format!("ontable-{x}")
}

fn clear(x: &str) -> String {
    format!("clear-{x}")
}

fn holding(x: &str) -> String {
    format!("holding-{x}")
}

const HANDEMPTY: &str = "handempty";

fn operators(blocks: &[String]) -> Vec<SymbolicAction> {
    let mut actions = Vec::new();
    for x in blocks {
        actions.push(
            SymbolicAction::new(format!("pickup-{x}"))
                .requires(clear(x))
                .requires(ontable(x))
                .requires(HANDEMPTY)
                .adds(holding(x))
                .deletes(clear(x))
                .deletes(ontable(x))
                .deletes(HANDEMPTY),
        );
        actions.push(
            SymbolicAction::new(format!("putdown-{x}"))
                .requires(holding(x))
                .adds(ontable(x))
                .adds(clear(x))
                .adds(HANDEMPTY)
                .deletes(holding(x)),
        );
        for y in blocks.iter().filter(|y| *y != x) {
            actions.push(
                SymbolicAction::new(format!("stack-{x}-{y}"))
                    .requires(holding(x))
                    .requires(clear(y))
                    .adds(on(x, y))
                    .adds(clear(x))
                    .adds(HANDEMPTY)
                    .deletes(holding(x))
                    .deletes(clear(y)),
            );
            actions.push(
                SymbolicAction::new(format!("unstack-{x}-{y}"))
                    .requires(on(x, y))
                    .requires(clear(x))
                    .requires(HANDEMPTY)
                    .adds(holding(x))
                    .adds(clear(y))
                    .deletes(on(x, y))
                    .deletes(clear(x))
                    .deletes(HANDEMPTY),
            );
        }
    }
    actions
}

/// Reverse a tower of `n` blocks.
///
/// # Panics
///
/// Panics if `n == 0`.
#[must_use]
pub fn blocks_reversal(n: usize) -> StripsTask {
    assert!(n > 0, "a tower needs at least one block");
    let blocks: Vec<String> = (1..=n).map(block).collect();

    let mut initial = vec![
        Literal::positive(HANDEMPTY),
        Literal::positive(clear(&blocks[0])),
        Literal::positive(ontable(&blocks[n - 1])),
    ];
    let mut goal = vec![Literal::positive(ontable(&blocks[0]))];
    for pair in blocks.windows(2) {
        initial.push(Literal::positive(on(&pair[0], &pair[1])));
        goal.push(Literal::positive(on(&pair[1], &pair[0])));
    }

    StripsTask {
        actions: operators(&blocks),
        initial,
        goal,
    }
}
