//! Question groups and their answer state

use serde::{Deserialize, Serialize};

use crate::answer::Answer;

/// Presentation tag of a head segment; carries no branching logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    #[default]
    Normal,
    /// Emphasised caution text shown alongside the question
    Precaution,
}

/// One display segment of a group's question text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadSegment {
    #[serde(default)]
    pub kind: SegmentKind,
    pub text: String,
}

impl HeadSegment {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Normal,
            text: text.into(),
        }
    }

    pub fn precaution(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Precaution,
            text: text.into(),
        }
    }
}

/// How an item's detail text is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailStyle {
    #[default]
    Plain,
    /// Rendered as a footnote with a reference mark (※)
    ReferenceMark,
}

/// One sub-question of a checklist group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub detail_style: DetailStyle,
}

impl QuestionItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            detail_style: DetailStyle::Plain,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>, style: DetailStyle) -> Self {
        self.detail = Some(detail.into());
        self.detail_style = style;
        self
    }
}

/// Whether a group is one yes/no question or a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Single,
    Checklist,
}

/// The answer state of one group
///
/// Group-level and item-level answers share one slot, so a checklist can
/// never hold a checked item and a "none apply" answer at the same time,
/// nor two checked items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupResponse {
    #[default]
    Unanswered,
    /// Group-level answer (Single yes/no, or checklist "none apply")
    Main { value: bool },
    /// One checklist item answered
    Item { index: usize, checked: bool },
}

impl GroupResponse {
    /// The group-level answer; unanswered whenever an item holds the slot
    pub fn main_answer(&self) -> Answer {
        match self {
            GroupResponse::Main { value } => Answer::from(*value),
            _ => Answer::Unanswered,
        }
    }

    pub fn item_answer(&self, item_index: usize) -> Answer {
        match self {
            GroupResponse::Item { index, checked } if *index == item_index => Answer::from(*checked),
            _ => Answer::Unanswered,
        }
    }

    /// Index of the checked item, if any
    pub fn checked_item(&self) -> Option<usize> {
        match self {
            GroupResponse::Item { index, checked: true } => Some(*index),
            _ => None,
        }
    }
}

/// One screen of the disclosure questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionGroup {
    /// Stable identity, reported as `questionId`
    pub id: u32,
    pub kind: GroupKind,
    pub head: Vec<HeadSegment>,
    #[serde(default)]
    pub items: Vec<QuestionItem>,
    /// Group-level answer value that declines the applicant
    pub disqualifying_answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_heading: Option<String>,
    #[serde(skip)]
    pub(crate) response: GroupResponse,
}

impl QuestionGroup {
    /// Creates a single yes/no group
    pub fn single(id: u32, head: Vec<HeadSegment>, disqualifying_answer: bool) -> Self {
        Self {
            id,
            kind: GroupKind::Single,
            head,
            items: Vec::new(),
            disqualifying_answer,
            list_heading: None,
            response: GroupResponse::Unanswered,
        }
    }

    /// Creates a checklist group
    pub fn checklist(
        id: u32,
        head: Vec<HeadSegment>,
        items: Vec<QuestionItem>,
        disqualifying_answer: bool,
    ) -> Self {
        Self {
            id,
            kind: GroupKind::Checklist,
            head,
            items,
            disqualifying_answer,
            list_heading: None,
            response: GroupResponse::Unanswered,
        }
    }

    pub fn with_list_heading(mut self, heading: impl Into<String>) -> Self {
        self.list_heading = Some(heading.into());
        self
    }

    pub fn response(&self) -> GroupResponse {
        self.response
    }

    pub fn main_answer(&self) -> Answer {
        self.response.main_answer()
    }

    /// Answer of the item at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for this group.
    pub fn item_answer(&self, index: usize) -> Answer {
        assert!(
            index < self.items.len(),
            "item index {index} out of range for group {} ({} items)",
            self.id,
            self.items.len()
        );
        self.response.item_answer(index)
    }

    pub fn is_checklist(&self) -> bool {
        self.kind == GroupKind::Checklist
    }

    /// Question text made of the `Normal` head segments only
    pub fn question_text(&self) -> String {
        self.head
            .iter()
            .filter(|segment| segment.kind == SegmentKind::Normal)
            .map(|segment| segment.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist() -> QuestionGroup {
        QuestionGroup::checklist(
            7,
            vec![HeadSegment::normal("次のいずれかに該当しますか？")],
            vec![QuestionItem::new("がん"), QuestionItem::new("脳卒中")],
            true,
        )
    }

    #[test]
    fn test_new_group_is_unanswered() {
        let group = checklist();
        assert_eq!(group.main_answer(), Answer::Unanswered);
        assert_eq!(group.item_answer(0), Answer::Unanswered);
        assert_eq!(group.item_answer(1), Answer::Unanswered);
    }

    #[test]
    fn test_item_slot_hides_main_answer() {
        let mut group = checklist();
        group.response = GroupResponse::Item { index: 1, checked: true };
        assert_eq!(group.main_answer(), Answer::Unanswered);
        assert_eq!(group.item_answer(0), Answer::Unanswered);
        assert_eq!(group.item_answer(1), Answer::Yes);
        assert_eq!(group.response().checked_item(), Some(1));
    }

    #[test]
    fn test_question_text_skips_precaution_segments() {
        let group = QuestionGroup::single(
            1,
            vec![
                HeadSegment::normal("現在、入院中ですか？"),
                HeadSegment::precaution("（検査入院を含みます）"),
                HeadSegment::normal("または入院を勧められていますか？"),
            ],
            true,
        );
        assert_eq!(
            group.question_text(),
            "現在、入院中ですか？または入院を勧められていますか？"
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_item_answer_out_of_range_panics() {
        checklist().item_answer(5);
    }

    #[test]
    fn test_deserialize_group_defaults() {
        let json = r#"{
            "id": 3,
            "kind": "checklist",
            "head": [{"text": "該当するものはありますか？"}],
            "items": [{"title": "心筋梗塞", "detail": "狭心症を含みます", "detailStyle": "reference_mark"}],
            "disqualifyingAnswer": true,
            "listHeading": "病名"
        }"#;
        let group: QuestionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.kind, GroupKind::Checklist);
        assert_eq!(group.head[0].kind, SegmentKind::Normal);
        assert_eq!(group.items[0].detail_style, DetailStyle::ReferenceMark);
        assert_eq!(group.list_heading.as_deref(), Some("病名"));
        assert_eq!(group.response(), GroupResponse::Unanswered);
    }
}
