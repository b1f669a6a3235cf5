use crate::api::{ApiClient, ApiError, ProfileResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// `Ok(None)` when the provider has no profile for the session.
    pub async fn load_current(&self) -> Result<Option<ProfileResponse>, ApiError> {
        match self.client.get_current_profile().await {
            Ok(profile) => Ok(Some(profile)),
            Err(err) if err.code == "NOT_FOUND" => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;

    fn repository(server: &MockServer) -> ProfileRepository {
        ProfileRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn load_current_returns_none_when_not_found() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/profile/me");
            then.status(404).json_body(serde_json::json!({
                "error": "profile not found",
                "code": "NOT_FOUND"
            }));
        });

        let profile = repository(&server).load_current().await.unwrap();
        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn load_current_propagates_other_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/profile/me");
            then.status(500).json_body(serde_json::json!({
                "error": "database unavailable",
                "code": "INTERNAL_ERROR"
            }));
        });

        let err = repository(&server)
            .load_current()
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "database unavailable");
    }
}
