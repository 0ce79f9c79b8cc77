use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::config::Config;
use crate::models::{MessagePayload, PollPayload};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct GreenApiClient {
    http: reqwest::Client,
    base_url: String,
    instance_id: String,
    api_token: String,
    chat_id: String,
}

impl GreenApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            instance_id: config.instance_id.clone(),
            api_token: config.api_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Sends a yes/no poll to the chat. Returns the webhook's response body.
    pub async fn send_poll(&self, message: &str) -> Result<String> {
        let payload = PollPayload::new(&self.chat_id, message);
        self.post("sendPoll", &payload).await
    }

    /// Sends a plain text message to the chat. Returns the webhook's response body.
    pub async fn send_message(&self, message: &str) -> Result<String> {
        let payload = MessagePayload::new(&self.chat_id, message);
        self.post("sendMessage", &payload).await
    }

    fn endpoint(&self, api_method: &str) -> String {
        format!(
            "{}/waInstance{}/{}/{}",
            self.base_url, self.instance_id, api_method, self.api_token
        )
    }

    async fn post<T: Serialize>(&self, api_method: &str, payload: &T) -> Result<String> {
        let resp = self
            .http
            .post(self.endpoint(api_method))
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .context("Green API request failed")?;

        let status = resp.status();
        let body = resp.text().await.context("Green API response read failed")?;

        if !status.is_success() {
            return Err(anyhow!("Green API error: {} - {}", status, body));
        }

        Ok(body)
    }
}
