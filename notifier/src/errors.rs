use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("{0} is not configured.")]
    MissingConfiguration(&'static str),

    #[error("Slack API error: {status} {body}")]
    WebhookStatus { status: u16, body: String },

    #[error("Failed to reach the Slack webhook: {0}")]
    WebhookTransport(#[from] reqwest::Error),

    #[error("Failed to encode Slack message: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DeliveryResult = Result<(), NotifierError>;
