use super::repository::PasswordResetError;
use crate::i18n::MessageResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetFormValues {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResetState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Sent,
}

impl ResetState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResetState::Submitting)
    }

    pub fn shows_form(&self) -> bool {
        matches!(self, ResetState::Idle | ResetState::Failed(_))
    }
}

/// What the screen body shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenSection {
    Progress,
    Form { error: Option<String> },
    Confirmation,
}

impl From<&ResetState> for ScreenSection {
    fn from(state: &ResetState) -> Self {
        match state {
            ResetState::Submitting => ScreenSection::Progress,
            ResetState::Idle => ScreenSection::Form { error: None },
            ResetState::Failed(message) => ScreenSection::Form {
                error: Some(message.clone()),
            },
            ResetState::Sent => ScreenSection::Confirmation,
        }
    }
}

/// Display text for a failed reset request.
pub fn failure_message(error: &PasswordResetError, messages: &dyn MessageResolver) -> String {
    match error {
        PasswordResetError::AccountNotFound { reason, .. } => messages.t(reason.message_key()),
        PasswordResetError::Unclassified { detail, .. } => detail.clone(),
    }
}
