use std::time::Duration;

use async_trait::async_trait;

use super::api::{ApiClient, ApiError, SignUpRequest, User};

/// Creates accounts for the signup screen.
#[async_trait]
pub trait AuthService: std::fmt::Debug + Send + Sync {
    async fn sign_up(&self, request: SignUpRequest) -> Result<User, ApiError>;
}

pub const SIMULATED_ACCESS_TOKEN: &str = "simulated";
pub const SIMULATED_USER_NAME: &str = "User Name";
pub const SIMULATED_USER_IMG: &str = "/images/user-36-05.jpg";

/// Stand-in for an authentication backend: waits then always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    delay: Duration,
}

impl SimulatedAuth {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthService for SimulatedAuth {
    async fn sign_up(&self, request: SignUpRequest) -> Result<User, ApiError> {
        tracing::debug!("Simulating signup of {}", request.username);
        tokio::time::sleep(self.delay).await;
        Ok(User {
            access_token: SIMULATED_ACCESS_TOKEN.to_string(),
            name: SIMULATED_USER_NAME.to_string(),
            img: SIMULATED_USER_IMG.to_string(),
        })
    }
}

#[async_trait]
impl AuthService for ApiClient {
    async fn sign_up(&self, request: SignUpRequest) -> Result<User, ApiError> {
        ApiClient::sign_up(self, &request).await
    }
}
