//! Tri-state answers and answer inputs

use serde::{Deserialize, Serialize};

/// An answer that may not have been given yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    #[default]
    Unanswered,
    Yes,
    No,
}

impl Answer {
    /// Collapses to a plain boolean for output; `Unanswered` becomes `false`
    pub fn collapse(self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub fn is_answered(self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    /// Returns `Some(bool)` when answered
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Answer::Unanswered => None,
            Answer::Yes => Some(true),
            Answer::No => Some(false),
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl From<Option<bool>> for Answer {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Answer::Unanswered, Answer::from)
    }
}

/// A single user action on the current question group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerInput {
    /// Group-level answer: the yes/no of a `Single` group, or the
    /// "none apply" control of a `Checklist` group
    Main { value: bool },
    /// Checking (or unchecking) one checklist item
    Item { index: usize, value: bool },
}

impl AnswerInput {
    pub fn yes() -> Self {
        AnswerInput::Main { value: true }
    }

    pub fn no() -> Self {
        AnswerInput::Main { value: false }
    }

    /// The checklist "none apply" control
    pub fn none_apply() -> Self {
        AnswerInput::Main { value: false }
    }

    /// Checks the item at `index`
    pub fn check(index: usize) -> Self {
        AnswerInput::Item { index, value: true }
    }
}
