use super::client::{ApiClient, ApiError};
use crate::models::{Credentials, LoginResponse};

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// A 401 here means wrong credentials, so it does not end the session.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post_public("/login", credentials).await
    }
}
