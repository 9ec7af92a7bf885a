use async_trait::async_trait;
use reqwest::Response;

/// Status and body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

impl std::fmt::Display for NotSuccessResponseInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status_code, self.text)
    }
}

#[async_trait]
pub trait ResponseExt: Sized {
    /// Turns a non-2xx response into its status and body.
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }
        tracing::warn!("{} responded with status {}", self.url(), status);
        let text = self
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());
        Err(NotSuccessResponseInfo {
            status_code: status.as_u16(),
            text,
        })
    }
}
