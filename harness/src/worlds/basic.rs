//! Small hand-written tasks.

use strips_kernel::carrier::literal::Literal;
use strips_kernel::operators::action::SymbolicAction;

use crate::reader::StripsTask;

/// One action, one step: `pickup` turns `handempty` into `holding`.
#[must_use]
pub fn pickup() -> StripsTask {
    StripsTask {
        actions: vec![SymbolicAction::new("pickup")
            .requires("handempty")
            .adds("holding")
            .deletes("handempty")],
        initial: vec![Literal::positive("handempty")],
        goal: vec![Literal::positive("holding")],
    }
}

/// A goal atom no action produces. The reachable space is two states.
#[must_use]
pub fn unreachable() -> StripsTask {
    StripsTask {
        actions: vec![
            SymbolicAction::new("light-on")
                .requires("dark")
                .adds("lit")
                .deletes("dark"),
            SymbolicAction::new("light-off")
                .requires("lit")
                .adds("dark")
                .deletes("lit"),
        ],
        initial: vec![Literal::positive("dark")],
        goal: vec![Literal::positive("treasure")],
    }
}

/// Walk `at-0 → at-n`, one position per step, with moves back allowed.
///
/// Has `n + 1` propositions and a unique shortest plan of `n` steps.
#[must_use]
pub fn chain(n: usize) -> StripsTask {
    let at = |i: usize| format!("at-{i:03}");
    let mut actions = Vec::with_capacity(2 * n);
    for i in 0..n {
        actions.push(
            SymbolicAction::new(format!("forward-{i:03}"))
                .requires(at(i))
                .adds(at(i + 1))
                .deletes(at(i)),
        );
        actions.push(
            SymbolicAction::new(format!("back-{i:03}"))
                .requires(at(i + 1))
                .adds(at(i))
                .deletes(at(i + 1)),
        );
    }
    StripsTask {
        actions,
        initial: vec![Literal::positive(at(0))],
        goal: vec![Literal::positive(at(n))],
    }
}
