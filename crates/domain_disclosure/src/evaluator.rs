//! Answer evaluator
//!
//! Classifies a group's current answer as disqualifying or not.

use crate::answer::Answer;
use crate::question::QuestionGroup;
use crate::settings::ChecklistPolicy;

/// Outcome of evaluating one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Disqualified,
}

impl Verdict {
    pub fn is_disqualified(self) -> bool {
        self == Verdict::Disqualified
    }
}

/// Evaluates the group's answer under the given checklist policy
pub fn evaluate(group: &QuestionGroup, policy: ChecklistPolicy) -> Verdict {
    if group.main_answer() == Answer::from(group.disqualifying_answer) {
        return Verdict::Disqualified;
    }

    let item_checked = group.response().checked_item().is_some();
    match policy {
        ChecklistPolicy::AnyItemChecked if group.is_checklist() && item_checked => {
            Verdict::Disqualified
        }
        ChecklistPolicy::GroupAnswerOnly if group.is_checklist() && item_checked => {
            tracing::debug!(
                group_id = group.id,
                "Checked item does not disqualify under group-answer-only policy"
            );
            Verdict::Accepted
        }
        _ => Verdict::Accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::AnswerInput;
    use crate::bank::QuestionBank;
    use crate::store::QuestionGroupStore;

    fn answered(group_index: usize, input: AnswerInput) -> QuestionGroup {
        let mut store = QuestionGroupStore::new(QuestionBank::standard_medical());
        store.apply_answer(group_index, input);
        store.group(group_index).clone()
    }

    #[test]
    fn test_single_yes_disqualifies() {
        let group = answered(0, AnswerInput::yes());
        assert_eq!(evaluate(&group, ChecklistPolicy::GroupAnswerOnly), Verdict::Disqualified);
    }

    #[test]
    fn test_single_no_accepted() {
        let group = answered(0, AnswerInput::no());
        assert_eq!(evaluate(&group, ChecklistPolicy::GroupAnswerOnly), Verdict::Accepted);
    }

    #[test]
    fn test_none_apply_accepted() {
        let group = answered(2, AnswerInput::none_apply());
        assert_eq!(evaluate(&group, ChecklistPolicy::AnyItemChecked), Verdict::Accepted);
    }

    #[test]
    fn test_checked_item_accepted_under_group_answer_only() {
        let group = answered(2, AnswerInput::check(0));
        assert_eq!(evaluate(&group, ChecklistPolicy::GroupAnswerOnly), Verdict::Accepted);
    }

    #[test]
    fn test_checked_item_disqualifies_under_any_item_checked() {
        let group = answered(2, AnswerInput::check(0));
        assert_eq!(evaluate(&group, ChecklistPolicy::AnyItemChecked), Verdict::Disqualified);
    }

    #[test]
    fn test_unchecked_item_accepted_under_any_item_checked() {
        let group = answered(2, AnswerInput::Item { index: 0, value: false });
        assert_eq!(evaluate(&group, ChecklistPolicy::AnyItemChecked), Verdict::Accepted);
    }

    #[test]
    fn test_disqualifying_answer_false() {
        let mut group = answered(1, AnswerInput::no());
        group.disqualifying_answer = false;
        assert!(evaluate(&group, ChecklistPolicy::GroupAnswerOnly).is_disqualified());
    }
}
