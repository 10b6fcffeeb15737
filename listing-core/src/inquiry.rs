use serde::{Deserialize, Serialize};

/// Placeholder identity for inquiries sent from the homepage form, which is
/// not tied to a particular property.
pub const GENERAL_INQUIRY_ID: &str = "general-inquiry";
pub const GENERAL_INQUIRY_TITLE: &str = "General Inquiry";

/// Wire payload for the leads endpoint. Serialized names follow the
/// endpoint's expected JSON keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub prop_id: String,
    pub prop_title: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub message: String,
}

/// Lifecycle of one inquiry form submission.
///
/// `Sending` disables the controls. `Sent` clears the fields and is
/// dismissed back to `Idle` after a call-site delay. `Failed` keeps the
/// typed contents and stays visible until the next attempt; a resubmission
/// is a brand-new POST.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl FormPhase {
    /// Inputs and the submit control are disabled while the POST is in flight.
    pub fn is_busy(self) -> bool {
        matches!(self, FormPhase::Sending)
    }

    pub fn banner_visible(self) -> bool {
        !matches!(self, FormPhase::Idle)
    }
}
