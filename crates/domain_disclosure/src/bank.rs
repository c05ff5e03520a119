//! Question bank loading and validation
//!
//! A bank is static configuration: the ordered list of question groups
//! shown to the applicant. Its shape is fixed once a session starts.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DisclosureError;
use crate::question::{DetailStyle, GroupKind, HeadSegment, QuestionGroup, QuestionItem};

/// Ordered list of question groups supplied to an engine at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    groups: Vec<QuestionGroup>,
}

impl QuestionBank {
    /// Creates a bank without validating it
    pub fn new(groups: Vec<QuestionGroup>) -> Self {
        Self { groups }
    }

    /// Parses and validates a bank from a JSON array of groups
    pub fn from_json_str(json: &str) -> Result<Self, DisclosureError> {
        let bank: QuestionBank = serde_json::from_str(json)?;
        bank.validate()?;
        Ok(bank)
    }

    /// Reads, parses and validates a bank file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DisclosureError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded question bank file");
        Self::from_json_str(&contents)
    }

    /// Checks the structural rules every bank must satisfy
    pub fn validate(&self) -> Result<(), DisclosureError> {
        if self.groups.is_empty() {
            return Err(DisclosureError::invalid_bank("bank has no question groups"));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.id) {
                return Err(DisclosureError::invalid_bank(format!(
                    "duplicate group id {}",
                    group.id
                )));
            }
            if group.head.is_empty() {
                return Err(DisclosureError::invalid_bank(format!(
                    "group {} has no question text",
                    group.id
                )));
            }
            match group.kind {
                GroupKind::Single if !group.items.is_empty() => {
                    return Err(DisclosureError::invalid_bank(format!(
                        "single group {} must not have items",
                        group.id
                    )));
                }
                GroupKind::Checklist if group.items.is_empty() => {
                    return Err(DisclosureError::invalid_bank(format!(
                        "checklist group {} has no items",
                        group.id
                    )));
                }
                _ => {}
            }
        }
        Ok(())
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

    pub fn into_groups(self) -> Vec<QuestionGroup> {
        self.groups
    }

    /// Built-in medical disclosure bank for the hospitalization product
    pub fn standard_medical() -> Self {
        Self::new(vec![
            QuestionGroup::single(
                1,
                vec![
                    HeadSegment::normal("現在、入院中ですか？または、医師から入院・手術をすすめられていますか？"),
                    HeadSegment::precaution("※検査入院・日帰り手術を含みます。"),
                ],
                true,
            ),
            QuestionGroup::single(
                2,
                vec![HeadSegment::normal(
                    "過去3か月以内に、医師の診察・検査・治療・投薬のいずれかを受けたことがありますか？",
                )],
                true,
            ),
            QuestionGroup::checklist(
                3,
                vec![
                    HeadSegment::normal("過去5年以内に、次の病気で医師の診察・検査・治療・投薬を受けたことがありますか？"),
                    HeadSegment::precaution("いずれか1つでも該当する場合はお引き受けできません。"),
                ],
                vec![
                    QuestionItem::new("がん（悪性新生物）")
                        .with_detail("上皮内がんを含みます", DetailStyle::ReferenceMark),
                    QuestionItem::new("心筋梗塞・狭心症"),
                    QuestionItem::new("脳卒中")
                        .with_detail("脳出血・脳梗塞・くも膜下出血", DetailStyle::Plain),
                    QuestionItem::new("肝硬変・慢性肝炎"),
                    QuestionItem::new("慢性腎臓病"),
                ],
                true,
            )
            .with_list_heading("病名"),
            QuestionGroup::single(
                4,
                vec![
                    HeadSegment::normal("現在、妊娠していますか？"),
                    HeadSegment::precaution("※被保険者が女性の場合のみお答えください。"),
                ],
                true,
            ),
        ])
    }
}

impl From<Vec<QuestionGroup>> for QuestionBank {
    fn from(groups: Vec<QuestionGroup>) -> Self {
        Self::new(groups)
    }
}
