use std::sync::Arc;

use async_trait::async_trait;
use ca_core::ports::SettingsApiPort;
use ca_core::user::ProfileUpdate;
use ca_core::{ApiError, UserProfile};
use reqwest::Method;

use super::HttpApiClient;

pub struct HttpSettingsApi {
    client: Arc<HttpApiClient>,
}

impl HttpSettingsApi {
    pub fn new(client: Arc<HttpApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsApiPort for HttpSettingsApi {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.client
            .request_data(Method::PUT, "/api/settings", Some(update))
            .await
    }
}
