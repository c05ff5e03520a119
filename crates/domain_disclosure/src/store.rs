//! Question group store
//!
//! Holds the ordered groups of one session and applies answer mutations.
//! Index misuse is a caller contract violation and panics.

use crate::answer::AnswerInput;
use crate::bank::QuestionBank;
use crate::question::{GroupResponse, QuestionGroup};

#[derive(Debug, Clone)]
pub struct QuestionGroupStore {
    groups: Vec<QuestionGroup>,
}

impl QuestionGroupStore {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            groups: bank.into_groups(),
        }
    }

    /// Applies an answer to the group at `group_index`
    ///
    /// A group-level answer replaces any item answer. An item answer
    /// replaces the group-level answer and every other item's answer.
    ///
    /// # Panics
    ///
    /// Panics if `group_index`, or the item index of an item answer, is out of range.
    pub fn apply_answer(&mut self, group_index: usize, input: AnswerInput) {
        let group = self.group_mut(group_index);
        group.response = match input {
            AnswerInput::Main { value } => GroupResponse::Main { value },
            AnswerInput::Item { index, value } => {
                assert!(
                    index < group.items.len(),
                    "item index {index} out of range for group {} ({} items)",
                    group.id,
                    group.items.len()
                );
                GroupResponse::Item {
                    index,
                    checked: value,
                }
            }
        };
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn group(&self, index: usize) -> &QuestionGroup {
        self.assert_in_range(index);
        &self.groups[index]
    }

    fn group_mut(&mut self, index: usize) -> &mut QuestionGroup {
        self.assert_in_range(index);
        &mut self.groups[index]
    }

    fn assert_in_range(&self, index: usize) {
        assert!(
            index < self.groups.len(),
            "group index {index} out of range ({} groups)",
            self.groups.len()
        );
    }

    pub fn groups(&self) -> &[QuestionGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.groups.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;

    fn store() -> QuestionGroupStore {
        QuestionGroupStore::new(QuestionBank::standard_medical())
    }

    #[test]
    fn test_single_answer_sets_main() {
        let mut store = store();
        store.apply_answer(0, AnswerInput::no());
        assert_eq!(store.group(0).main_answer(), Answer::No);
    }

    #[test]
    fn test_item_answer_clears_main_and_other_items() {
        let mut store = store();
        store.apply_answer(2, AnswerInput::none_apply());
        store.apply_answer(2, AnswerInput::check(1));
        store.apply_answer(2, AnswerInput::check(3));

        let group = store.group(2);
        assert_eq!(group.main_answer(), Answer::Unanswered);
        assert_eq!(group.item_answer(1), Answer::Unanswered);
        assert_eq!(group.item_answer(3), Answer::Yes);
    }

    #[test]
    fn test_none_apply_clears_items() {
        let mut store = store();
        store.apply_answer(2, AnswerInput::check(0));
        store.apply_answer(2, AnswerInput::none_apply());

        let group = store.group(2);
        assert_eq!(group.main_answer(), Answer::No);
        assert!((0..group.items.len()).all(|i| group.item_answer(i) == Answer::Unanswered));
    }

    #[test]
    fn test_unchecking_item_keeps_main_unanswered() {
        let mut store = store();
        store.apply_answer(2, AnswerInput::Item { index: 0, value: false });
        assert_eq!(store.group(2).main_answer(), Answer::Unanswered);
        assert_eq!(store.group(2).item_answer(0), Answer::No);
    }

    #[test]
    #[should_panic(expected = "group index 9 out of range")]
    fn test_group_out_of_range_panics() {
        store().apply_answer(9, AnswerInput::yes());
    }

    #[test]
    #[should_panic(expected = "item index 0 out of range")]
    fn test_item_on_single_group_panics() {
        store().apply_answer(0, AnswerInput::check(0));
    }
}
