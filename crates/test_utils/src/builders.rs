//! Test Data Builders
//!
//! Provides builder patterns for constructing question groups and banks
//! with sensible defaults. Tests specify only the relevant fields.

use domain_disclosure::{
    DetailStyle, GroupKind, HeadSegment, QuestionBank, QuestionGroup, QuestionItem,
};

/// Builder for constructing test question groups
pub struct QuestionGroupBuilder {
    id: u32,
    kind: GroupKind,
    head: Vec<HeadSegment>,
    items: Vec<QuestionItem>,
    disqualifying_answer: bool,
    list_heading: Option<String>,
}

impl QuestionGroupBuilder {
    /// Creates a single yes/no group that a "yes" disqualifies
    pub fn single(id: u32) -> Self {
        Self {
            id,
            kind: GroupKind::Single,
            head: Vec::new(),
            items: Vec::new(),
            disqualifying_answer: true,
            list_heading: None,
        }
    }

    /// Creates a checklist group with no items yet
    pub fn checklist(id: u32) -> Self {
        Self {
            kind: GroupKind::Checklist,
            ..Self::single(id)
        }
    }

    /// Appends a normal head segment
    pub fn head(mut self, text: impl Into<String>) -> Self {
        self.head.push(HeadSegment::normal(text));
        self
    }

    /// Appends a precaution head segment
    pub fn precaution(mut self, text: impl Into<String>) -> Self {
        self.head.push(HeadSegment::precaution(text));
        self
    }

    /// Appends a checklist item
    pub fn item(mut self, title: impl Into<String>) -> Self {
        self.items.push(QuestionItem::new(title));
        self
    }

    /// Appends a checklist item with footnote-style detail
    pub fn item_with_note(mut self, title: impl Into<String>, note: impl Into<String>) -> Self {
        self.items
            .push(QuestionItem::new(title).with_detail(note, DetailStyle::ReferenceMark));
        self
    }

    /// Sets the answer value that disqualifies
    pub fn disqualifying_answer(mut self, value: bool) -> Self {
        self.disqualifying_answer = value;
        self
    }

    pub fn list_heading(mut self, heading: impl Into<String>) -> Self {
        self.list_heading = Some(heading.into());
        self
    }

    pub fn build(self) -> QuestionGroup {
        let head = if self.head.is_empty() {
            vec![HeadSegment::normal(format!("質問{}", self.id))]
        } else {
            self.head
        };

        let group = match self.kind {
            GroupKind::Single => QuestionGroup::single(self.id, head, self.disqualifying_answer),
            GroupKind::Checklist => {
                QuestionGroup::checklist(self.id, head, self.items, self.disqualifying_answer)
            }
        };
        match self.list_heading {
            Some(heading) => group.with_list_heading(heading),
            None => group,
        }
    }
}

/// Builder for constructing test question banks
#[derive(Default)]
pub struct QuestionBankBuilder {
    groups: Vec<QuestionGroup>,
}

impl QuestionBankBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group
    pub fn group(mut self, group: QuestionGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Appends `count` single groups with consecutive ids after the last one
    pub fn singles(mut self, count: u32) -> Self {
        let start = self.groups.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        for id in start..start + count {
            self.groups.push(QuestionGroupBuilder::single(id).build());
        }
        self
    }

    pub fn build(self) -> QuestionBank {
        QuestionBank::new(self.groups)
    }
}
