use serde::{Deserialize, Serialize};

pub const MISSING_WEBHOOK_BODY: &str = "SLACK_WEBHOOK_URL is not configured.";
pub const DELIVERED_BODY: &str = "Notification sent successfully.";
pub const DELIVERY_FAILED_BODY: &str = "Failed to send notification.";

/// Result returned to the Lambda runtime for one invocation.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn delivered() -> Self {
        InvocationResponse {
            status_code: 200,
            body: DELIVERED_BODY.to_string(),
        }
    }

    pub fn missing_webhook_url() -> Self {
        InvocationResponse {
            status_code: 500,
            body: MISSING_WEBHOOK_BODY.to_string(),
        }
    }

    pub fn delivery_failed() -> Self {
        InvocationResponse {
            status_code: 500,
            body: DELIVERY_FAILED_BODY.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
