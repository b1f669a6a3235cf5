use super::{
    client::ApiClient,
    types::{ApiError, ProfileResponse},
};

impl ApiClient {
    pub async fn get_current_profile(&self) -> Result<ProfileResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send_json(self.http_client().get(format!("{}/profile/me", base_url)))
            .await
    }
}
