use super::types::ResetFormValues;
use thiserror::Error;
use validator::ValidateEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormRejection {
    #[error("email is required")]
    Required,
    #[error("email is not a valid address")]
    InvalidEmail,
}

impl FormRejection {
    pub fn message_key(&self) -> &'static str {
        match self {
            FormRejection::Required => "password_reset.email_required",
            FormRejection::InvalidEmail => "password_reset.email_invalid",
        }
    }
}

pub fn collect_reset_form(raw_email: &str) -> Result<ResetFormValues, FormRejection> {
    let email = raw_email.trim();
    if email.is_empty() {
        return Err(FormRejection::Required);
    }
    if !email.validate_email() {
        return Err(FormRejection::InvalidEmail);
    }
    Ok(ResetFormValues {
        email: email.to_string(),
    })
}
