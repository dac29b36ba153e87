//! STRIPS text reader.
//!
//! # Format
//!
//! ```text
//! <action name>
//! <precondition>;<precondition>;...
//! <effect>;<effect>;...
//! ...more three-line action blocks...
//! <empty line>
//! <initial atom>;<initial atom>;...
//! <goal atom>;<goal atom>;...
//! ```
//!
//! A leading `~` negates a literal. Empty fields are ignored, so an action
//! without preconditions has an empty second line. Lines after the goal
//! line are ignored.

use std::path::Path;

use strips_kernel::carrier::index::PropositionIndex;
use strips_kernel::carrier::literal::Literal;
use strips_kernel::error::EncodeError;
use strips_kernel::operators::action::SymbolicAction;
use log::warn;
use strips_kernel::problem::Problem;
use thiserror::Error;

use crate::error::HarnessError;

const FIELD_SEPARATOR: char = ';';

/// Malformed STRIPS text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("line {line}: input ends inside the block of action `{name}`")]
    UnterminatedAction { line: usize, name: String },
    #[error("line {line}: missing initial-state line")]
    MissingInitialState { line: usize },
    #[error("line {line}: missing goal line")]
    MissingGoal { line: usize },
}

/// A symbolic planning task as read from text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StripsTask {
    pub actions: Vec<SymbolicAction>,
    pub initial: Vec<Literal>,
    pub goal: Vec<Literal>,
}

impl StripsTask {
    /// Index over every atom mentioned by actions, initial state and goal.
    #[must_use]
    pub fn index(&self) -> PropositionIndex {
        let action_atoms = self.actions.iter().flat_map(SymbolicAction::atoms);
        let state_atoms = self.initial.iter().chain(&self.goal).map(|l| &l.atom);
        PropositionIndex::from_names(action_atoms.chain(state_atoms).cloned())
    }

    /// Build the index and encode the task.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::DuplicateAction`] if two actions share a name.
    pub fn into_problem(self) -> Result<Problem, EncodeError> {
        let index = self.index();
        Problem::encode(index, self.actions, &self.initial, &self.goal)
    }

    /// Render back to STRIPS text.
    #[must_use]
    pub fn to_strips_text(&self) -> String {
        let mut out = String::new();
        for action in &self.actions {
            let pre: Vec<Literal> = action
                .pre_pos
                .iter()
                .map(Literal::positive)
                .chain(action.pre_neg.iter().map(Literal::negative))
                .collect();
            let eff: Vec<Literal> = action
                .eff_pos
                .iter()
                .map(Literal::positive)
                .chain(action.eff_neg.iter().map(Literal::negative))
                .collect();
            out.push_str(&action.name);
            out.push('\n');
            out.push_str(&join_fields(&pre));
            out.push('\n');
            out.push_str(&join_fields(&eff));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&join_fields(&self.initial));
        out.push('\n');
        out.push_str(&join_fields(&self.goal));
        out.push('\n');
        out
    }
}

fn join_fields(literals: &[Literal]) -> String {
    literals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}

fn split_fields(line: &str) -> Vec<Literal> {
    line.split(FIELD_SEPARATOR).filter_map(Literal::parse).collect()
}

/// Parse STRIPS text.
///
/// # Errors
///
/// Returns [`ReadError`] if an action block is cut short or the initial or
/// goal line is missing.
pub fn read_strips(text: &str) -> Result<StripsTask, ReadError> {
    let mut lines = text.lines().map(str::trim).enumerate().map(|(i, l)| (i + 1, l));
    let mut task = StripsTask::default();
    let mut last_line = 0;

    loop {
        let Some((line, name)) = lines.next() else {
            return Err(ReadError::MissingInitialState { line: last_line + 1 });
        };
        last_line = line;
        if name.is_empty() {
            break;
        }
        let (Some((_, pre)), Some((effect_line, eff))) = (lines.next(), lines.next()) else {
            return Err(ReadError::UnterminatedAction {
                line,
                name: name.to_string(),
            });
        };
        last_line = effect_line;
        task.actions.push(SymbolicAction::from_literals(
            name,
            &split_fields(pre),
            &split_fields(eff),
        ));
    }

    let Some((initial_line, initial)) = lines.next() else {
        return Err(ReadError::MissingInitialState { line: last_line + 1 });
    };
    task.initial = split_fields(initial);
    let Some((_, goal)) = lines.next() else {
        return Err(ReadError::MissingGoal {
            line: initial_line + 1,
        });
    };
    task.goal = split_fields(goal);

    if let Some((line, _)) = lines.find(|(_, l)| !l.is_empty()) {
        warn!(
            "line {line}: content after the goal line is ignored; \
             action blocks must not be separated by empty lines"
        );
    }
    Ok(task)
}

/// Read and parse a STRIPS file.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be read and
/// [`HarnessError::Read`] if its contents are malformed.
pub fn read_strips_file(path: &Path) -> Result<StripsTask, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_strips(&text).map_err(|source| HarnessError::Read {
        path: path.to_path_buf(),
        source,
    })
}
