use reqwest::StatusCode;

use std::time::Duration;

use crate::dto::ContactSubmission;

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Failed to reach contact server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Contact server returned error: {0}")]
    Status(StatusCode),
}

#[derive(Clone)]
pub struct FormClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FormClient {
    /// Requests carry no timeout; use [`FormClient::with_timeout`] to bound them.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{SEND_EMAIL_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one submission and reports whether the server accepted it.
    pub async fn submit(&self, data: ContactSubmission) -> Result<(), SubmitError> {
        tracing::debug!("Posting contact submission to {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(&data).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}
