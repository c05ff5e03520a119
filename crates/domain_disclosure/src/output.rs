//! Completion payload

use serde::{Deserialize, Serialize};

use crate::question::QuestionGroup;

/// One answered question as reported to the completion sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureAnswer {
    pub question_id: u32,
    /// The group's `Normal` head segments, concatenated
    pub question: String,
    /// Group-level answer; an unanswered group reports `false`
    pub answer: bool,
    /// Always mirrors `answer`; kept for consumers that read this field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_answer: Option<bool>,
}

impl DisclosureAnswer {
    pub fn from_group(group: &QuestionGroup) -> Self {
        let answer = group.main_answer().collapse();
        Self {
            question_id: group.id,
            question: group.question_text(),
            answer,
            follow_up_answer: Some(answer),
        }
    }
}

/// Builds the ordered completion payload for every group
pub fn collect_answers(groups: &[QuestionGroup]) -> Vec<DisclosureAnswer> {
    groups.iter().map(DisclosureAnswer::from_group).collect()
}
