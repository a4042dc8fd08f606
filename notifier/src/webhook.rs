use env_defs::SlackMessage;
use log::{debug, info, warn};

use crate::{DeliveryResult, NotifierError};

/// Posts messages to a Slack incoming webhook.
#[derive(Clone, Debug, Default)]
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    /// Sends `message` as a JSON body. Any non-2xx status is a failure that
    /// carries the status code and response body.
    pub async fn send(&self, webhook_url: &str, message: &SlackMessage) -> DeliveryResult {
        let payload = serde_json::to_string(message)?;
        debug!("Sending Slack message: {}", payload);

        let response = self
            .http
            .post(webhook_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Slack webhook returned {}: {}", status, body);
            return Err(NotifierError::WebhookStatus {
                status: status.as_u16(),
                body,
            });
        }

        info!("Slack message sent successfully");
        Ok(())
    }
}
