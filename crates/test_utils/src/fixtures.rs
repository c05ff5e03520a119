//! Pre-built Test Fixtures
//!
//! Ready-to-use banks and settings, consistent and predictable for tests.

use domain_disclosure::{ChecklistPolicy, EngineSettings, QuestionBank};

use crate::builders::{QuestionBankBuilder, QuestionGroupBuilder};

/// Fixture for question banks
pub struct BankFixtures;

impl BankFixtures {
    /// Three single groups with ids 1, 2, 3; "yes" disqualifies each
    pub fn three_singles() -> QuestionBank {
        QuestionBankBuilder::new().singles(3).build()
    }

    /// Five single groups with ids 1 through 5
    pub fn five_singles() -> QuestionBank {
        QuestionBankBuilder::new().singles(5).build()
    }

    /// Four single groups with ids 1 through 4; group 2 is disqualified by "no"
    pub fn mixed_polarity() -> QuestionBank {
        QuestionBankBuilder::new()
            .group(QuestionGroupBuilder::single(1).head("現在、入院中ですか？").build())
            .group(
                QuestionGroupBuilder::single(2)
                    .head("現在、健康に日常生活を送っていますか？")
                    .disqualifying_answer(false)
                    .build(),
            )
            .group(QuestionGroupBuilder::single(3).head("現在、通院中ですか？").build())
            .group(QuestionGroupBuilder::single(4).head("現在、妊娠していますか？").build())
            .build()
    }

    /// Single, checklist (three items), single
    pub fn with_checklist() -> QuestionBank {
        QuestionBankBuilder::new()
            .group(
                QuestionGroupBuilder::single(10)
                    .head("現在、入院中ですか？")
                    .precaution("※検査入院を含みます。")
                    .build(),
            )
            .group(
                QuestionGroupBuilder::checklist(20)
                    .head("過去5年以内に次の病気にかかったことがありますか？")
                    .item_with_note("がん", "上皮内がんを含みます")
                    .item("心筋梗塞")
                    .item("脳卒中")
                    .list_heading("病名")
                    .build(),
            )
            .group(
                QuestionGroupBuilder::single(30)
                    .head("現在、妊娠していますか？")
                    .build(),
            )
            .build()
    }

    /// The built-in production bank
    pub fn standard_medical() -> QuestionBank {
        QuestionBank::standard_medical()
    }
}

/// Fixture for engine settings
pub struct SettingsFixtures;

impl SettingsFixtures {
    /// Default settings: 300ms delay, group-answer-only checklist policy
    pub fn standard() -> EngineSettings {
        EngineSettings::default()
    }

    /// Checked checklist items disqualify
    pub fn strict_checklist() -> EngineSettings {
        EngineSettings::default().with_checklist_policy(ChecklistPolicy::AnyItemChecked)
    }

    /// No display delay
    pub fn immediate() -> EngineSettings {
        EngineSettings::default().with_advance_delay_ms(0)
    }
}
