//! Navigation controller
//!
//! Tracks the current position, the furthest position reached by forward
//! progression, and the set of groups answered without disqualification.

use std::collections::BTreeSet;

use crate::answer::Answer;
use crate::error::DisclosureError;

/// What the controller decided after a group was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved forward to a newly reached group
    Advance { to: usize },
    /// A revisited group was changed; stay on it
    Stay { at: usize },
    /// The last group was accepted
    Finish,
}

/// Position state; only the engine drives it, so `current <= furthest` always holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    furthest: usize,
    completed: BTreeSet<usize>,
    last: usize,
}

impl Navigator {
    /// Creates a controller for a bank of `len` groups, positioned at the first
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "navigator needs at least one question group");
        Self {
            current: 0,
            furthest: 0,
            completed: BTreeSet::new(),
            last: len - 1,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn last(&self) -> usize {
        self.last
    }

    /// Records that group `index` was accepted and decides the next step
    pub fn record_completion(&mut self, index: usize) -> Step {
        assert!(index <= self.last, "group index {index} out of range");
        self.completed.insert(index);

        if index < self.furthest {
            return Step::Stay { at: index };
        }
        if index == self.last {
            return Step::Finish;
        }
        self.current = index + 1;
        self.furthest = index + 1;
        Step::Advance { to: self.current }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn go_previous(&mut self) -> Result<usize, DisclosureError> {
        if !self.can_go_previous() {
            return Err(DisclosureError::NavigationUnavailable(
                "already at the first question".to_string(),
            ));
        }
        self.current -= 1;
        Ok(self.current)
    }

    /// The manual "next question" control shows only on a revisited group
    /// whose group-level answer is exactly "no"
    pub fn can_go_next(&self, current_main_answer: Answer) -> bool {
        self.current < self.furthest && current_main_answer == Answer::No
    }

    pub fn go_next(&mut self, current_main_answer: Answer) -> Result<usize, DisclosureError> {
        if !self.can_go_next(current_main_answer) {
            return Err(DisclosureError::NavigationUnavailable(format!(
                "next question is not available from question {}",
                self.current + 1
            )));
        }
        self.current += 1;
        Ok(self.current)
    }
}
