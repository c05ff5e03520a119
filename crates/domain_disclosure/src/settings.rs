//! Engine settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between applying an answer and evaluating it, so the checkmark can render
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 300;

/// How checked checklist items take part in disqualification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistPolicy {
    /// Only the group-level answer is compared with the disqualifying
    /// answer. A checked item leaves the group-level answer unset and so
    /// never disqualifies on its own.
    #[default]
    GroupAnswerOnly,
    /// A checked item counts as the group's disqualifying answer
    AnyItemChecked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub advance_delay_ms: u64,
    pub checklist_policy: ChecklistPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            advance_delay_ms: DEFAULT_ADVANCE_DELAY_MS,
            checklist_policy: ChecklistPolicy::GroupAnswerOnly,
        }
    }
}

impl EngineSettings {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn with_checklist_policy(mut self, policy: ChecklistPolicy) -> Self {
        self.checklist_policy = policy;
        self
    }

    pub fn with_advance_delay_ms(mut self, delay_ms: u64) -> Self {
        self.advance_delay_ms = delay_ms;
        self
    }
}
