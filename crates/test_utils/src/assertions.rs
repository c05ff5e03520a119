//! Custom Test Assertions
//!
//! Assertion helpers for disclosure types that give more meaningful
//! failure messages than standard assertions.

use domain_disclosure::{Answer, DisclosureAnswer, QuestionGroup};

/// Asserts that a checklist group holds at most one of: a checked item, or "none apply"
///
/// # Panics
///
/// Panics if more than one item is checked, or an item is checked while
/// the group-level answer is "no".
pub fn assert_checklist_exclusive(group: &QuestionGroup) {
    let checked: Vec<usize> = (0..group.items.len())
        .filter(|&i| group.item_answer(i) == Answer::Yes)
        .collect();

    assert!(
        checked.len() <= 1,
        "Group {} has more than one checked item: {:?}",
        group.id,
        checked
    );
    assert!(
        checked.is_empty() || group.main_answer() == Answer::Unanswered,
        "Group {} has checked item {:?} and group-level answer {:?}",
        group.id,
        checked,
        group.main_answer()
    );
}

/// Asserts that a completion payload lists exactly the given question ids, in order
pub fn assert_question_ids(answers: &[DisclosureAnswer], expected: &[u32]) {
    let actual: Vec<u32> = answers.iter().map(|a| a.question_id).collect();
    assert_eq!(
        actual, expected,
        "Completion payload ids differ: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that every answer in a payload has the given value
pub fn assert_all_answers(answers: &[DisclosureAnswer], value: bool) {
    for answer in answers {
        assert_eq!(
            answer.answer, value,
            "Question {} answered {}, expected {}",
            answer.question_id, answer.answer, value
        );
        assert_eq!(
            answer.follow_up_answer,
            Some(answer.answer),
            "Question {} follow-up answer does not mirror answer",
            answer.question_id
        );
    }
}
