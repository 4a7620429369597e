use super::{
    client::ApiClient,
    types::{ApiError, CurrentUser, CurrentUserEnvelope},
};

impl ApiClient {
    pub async fn get_me(&self) -> Result<CurrentUser, ApiError> {
        let url = self.endpoint("/auth/me").await;
        let envelope: CurrentUserEnvelope = self.send_json(self.http_client().get(url)).await?;
        Ok(envelope.into_user())
    }
}
