//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating user interactions with a
//! disclosure session.

use domain_disclosure::{AnswerInput, DisclosureEngine, DisclosureError, DisqualificationChoice};
use proptest::prelude::*;

/// Strategy for clicks on a checklist with `item_count` items
pub fn checklist_click_strategy(item_count: usize) -> impl Strategy<Value = AnswerInput> {
    prop_oneof![
        Just(AnswerInput::none_apply()),
        (0..item_count).prop_map(AnswerInput::check),
        (0..item_count).prop_map(|index| AnswerInput::Item { index, value: false }),
    ]
}

/// Strategy for sequences of checklist clicks
pub fn checklist_clicks_strategy(
    item_count: usize,
    max_len: usize,
) -> impl Strategy<Value = Vec<AnswerInput>> {
    prop::collection::vec(checklist_click_strategy(item_count), 1..max_len)
}

/// One user interaction with a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Answer and evaluate at once
    Answer(bool),
    /// Answer and leave the evaluation pending
    AnswerDeferred(bool),
    /// Settle whatever evaluation is pending
    Settle,
    Previous,
    Next,
    Resolve(DisqualificationChoice),
}

impl UserAction {
    /// Applies the action and reports whether the engine accepted it
    ///
    /// Rejections the current state explains are expected; any other error
    /// panics so the calling property fails.
    pub fn apply(self, engine: &mut DisclosureEngine) -> bool {
        let result = match self {
            UserAction::Answer(value) => engine.answer_now(AnswerInput::Main { value }).map(|_| ()),
            UserAction::AnswerDeferred(value) => engine.answer(AnswerInput::Main { value }).map(|_| ()),
            UserAction::Settle => match engine.pending() {
                Some(ticket) => engine.settle(ticket).map(|_| ()),
                None => Ok(()),
            },
            UserAction::Previous => engine.go_previous().map(|_| ()),
            UserAction::Next => engine.go_next().map(|_| ()),
            UserAction::Resolve(choice) => engine.resolve_disqualification(choice).map(|_| ()),
        };

        match result {
            Ok(()) => true,
            Err(DisclosureError::InvalidStateTransition { .. })
            | Err(DisclosureError::NavigationUnavailable(_)) => false,
            Err(other) => panic!("unexpected error applying {:?}: {}", self, other),
        }
    }
}

/// Strategy for a single user action; answers lean towards "no" so sessions progress
pub fn user_action_strategy() -> impl Strategy<Value = UserAction> {
    prop_oneof![
        4 => Just(UserAction::Answer(false)),
        1 => Just(UserAction::Answer(true)),
        2 => Just(UserAction::AnswerDeferred(false)),
        1 => Just(UserAction::AnswerDeferred(true)),
        1 => Just(UserAction::Settle),
        2 => Just(UserAction::Previous),
        2 => Just(UserAction::Next),
        1 => Just(UserAction::Resolve(DisqualificationChoice::ReturnToRevise)),
    ]
}

/// Strategy for sequences of user actions
pub fn user_actions_strategy(max_len: usize) -> impl Strategy<Value = Vec<UserAction>> {
    prop::collection::vec(user_action_strategy(), 1..max_len)
}
