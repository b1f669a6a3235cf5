use crate::api::{ApiClient, ApiError};
use async_trait::async_trait;
use std::rc::Rc;
use thiserror::Error;

pub const CODE_USER_NOT_FOUND: &str = "auth/user-not-found";
pub const CODE_NO_ACCOUNT: &str = "auth/no-account";

/// Which account lookup failed. Both carry the same user guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountNotFoundReason {
    UserNotFound,
    NoAccount,
}

impl AccountNotFoundReason {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            CODE_USER_NOT_FOUND => Some(Self::UserNotFound),
            CODE_NO_ACCOUNT => Some(Self::NoAccount),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound => CODE_USER_NOT_FOUND,
            Self::NoAccount => CODE_NO_ACCOUNT,
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            Self::UserNotFound => "password_reset.user_not_found",
            Self::NoAccount => "password_reset.no_account",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordResetError {
    #[error("{detail}")]
    AccountNotFound {
        reason: AccountNotFoundReason,
        detail: String,
    },
    #[error("{detail}")]
    Unclassified {
        code: Option<String>,
        detail: String,
    },
}

impl PasswordResetError {
    /// Classifies a failure by its backend code. `detail` is the raw error text.
    pub fn from_code(code: Option<&str>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match code.and_then(AccountNotFoundReason::from_code) {
            Some(reason) => Self::AccountNotFound { reason, detail },
            None => Self::Unclassified {
                code: code.map(str::to_string),
                detail,
            },
        }
    }

    /// Backend code as received, including codes with no dedicated message.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::AccountNotFound { reason, .. } => Some(reason.code()),
            Self::Unclassified { code, .. } => code.as_deref(),
        }
    }
}

impl From<ApiError> for PasswordResetError {
    fn from(error: ApiError) -> Self {
        Self::from_code(error.backend_code(), error.to_string())
    }
}

/// Sends the "reset your password" email for an account.
#[async_trait(?Send)]
pub trait PasswordResetService {
    async fn reset_user_password(&self, email: &str) -> Result<(), PasswordResetError>;
}

#[async_trait(?Send)]
impl PasswordResetService for ApiClient {
    async fn reset_user_password(&self, email: &str) -> Result<(), PasswordResetError> {
        self.request_password_reset(email)
            .await
            .map_err(PasswordResetError::from)
    }
}

#[derive(Clone)]
pub struct PasswordResetRepository {
    service: Rc<dyn PasswordResetService>,
}

impl PasswordResetRepository {
    pub fn new(service: Rc<dyn PasswordResetService>) -> Self {
        Self { service }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { service: client }
    }

    pub async fn request_reset(&self, email: &str) -> Result<(), PasswordResetError> {
        self.service.reset_user_password(email).await
    }
}
