//! Disqualification flow
//!
//! When a group's answer declines the applicant the session blocks on a
//! modal decision: cancel the application, or return and revise the answer.
//! The modal cannot be dismissed by clicking its backdrop.

use serde::{Deserialize, Serialize};

use core_kernel::SessionId;

use crate::ports::CancellationOutcome;

/// Fixed explanation shown in the disqualification dialog
pub const DISQUALIFICATION_MESSAGE: &str =
    "誠に申し訳ございませんが、ご回答いただいた内容では、本保険にお申込みいただくことができません。";

/// Payload handed to the disqualification handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisqualificationNotice {
    pub session_id: SessionId,
    pub group_id: u32,
    pub group_index: usize,
    pub message: String,
    /// Always `false`: only the two explicit choices close the dialog
    pub dismissible: bool,
}

impl DisqualificationNotice {
    pub fn new(session_id: SessionId, group_id: u32, group_index: usize) -> Self {
        Self {
            session_id,
            group_id,
            group_index,
            message: DISQUALIFICATION_MESSAGE.to_string(),
            dismissible: false,
        }
    }
}

/// The two controls of the disqualification dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisqualificationChoice {
    /// Primary control: abandon the application
    CancelApplication,
    /// Secondary control: go back to the disqualifying group
    ReturnToRevise,
}

/// What resolving the dialog did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Dialog closed; the group at `index` is editable again
    Returned { index: usize },
    /// Session ended through the configured cancellation policy
    Cancelled(CancellationOutcome),
}
