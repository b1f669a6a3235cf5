use super::{
    client::ApiClient,
    types::{ApiError, PasswordResetRequest},
};

impl ApiClient {
    /// Asks the identity provider to email a reset link to `email`.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = PasswordResetRequest {
            email: email.to_string(),
        };
        self.send(
            self.http_client()
                .post(format!("{}/auth/request-password-reset", base_url))
                .json(&payload),
        )
        .await
        .map(|_| ())
    }
}
