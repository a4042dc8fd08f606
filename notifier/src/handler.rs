use std::sync::Arc;

use env_defs::{BuildEvent, EnrichedMetadata, InvocationResponse, MetadataSource};
use log::{debug, error, info};

use crate::{build_message, DeliveryResult, Enricher, NotifierConfig, NotifierError, WebhookClient};

/// The whole pipeline for one build-status event: enrich, format, deliver.
pub struct BuildNotifier {
    config: NotifierConfig,
    enricher: Option<Enricher>,
    webhook: WebhookClient,
}

impl BuildNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        BuildNotifier {
            config,
            enricher: None,
            webhook: WebhookClient::default(),
        }
    }

    pub fn with_metadata_source(mut self, source: Arc<dyn MetadataSource>) -> Self {
        self.enricher = Some(Enricher::new(source));
        self
    }

    /// Runs the pipeline and converts the outcome into the invocation result.
    /// Never fails: every error becomes a 500 response.
    pub async fn handle(&self, event: &BuildEvent) -> InvocationResponse {
        if let Err(e) = self.config.webhook_url() {
            error!("Error: {}", e);
            return InvocationResponse::missing_webhook_url();
        }

        debug!(
            "Extracted details: appId={:?} branchName={:?} jobStatus={:?} jobId={:?} region={}",
            event.app_id(),
            event.branch_name(),
            event.job_status(),
            event.job_id(),
            event.region_or(&self.config.default_region)
        );

        let metadata = self.enrich(event).await;

        match self.notify(event, &metadata).await {
            Ok(()) => InvocationResponse::delivered(),
            Err(NotifierError::MissingConfiguration(name)) => {
                error!("Error: {} is not configured.", name);
                InvocationResponse::missing_webhook_url()
            }
            Err(e) => {
                error!("Failed to send message to Slack: {}", e);
                InvocationResponse::delivery_failed()
            }
        }
    }

    /// Best-effort metadata for the event. Falls back to the app id when
    /// enrichment is disabled or no metadata source is attached.
    pub async fn enrich(&self, event: &BuildEvent) -> EnrichedMetadata {
        match &self.enricher {
            Some(enricher) if self.config.enrichment_enabled => {
                enricher
                    .enrich(
                        event.region_or(&self.config.default_region),
                        event.app_id(),
                        event.branch_name(),
                        event.job_id(),
                    )
                    .await
            }
            _ => {
                debug!("Metadata enrichment disabled");
                EnrichedMetadata::fallback(event.app_id())
            }
        }
    }

    /// Builds the message and delivers it once. No retries.
    pub async fn notify(&self, event: &BuildEvent, metadata: &EnrichedMetadata) -> DeliveryResult {
        let webhook_url = self.config.webhook_url()?;
        let message = build_message(event, metadata, &self.config);
        self.webhook.send(webhook_url, &message).await?;
        info!(
            "Notified about {} build of {:?}",
            event.job_status().unwrap_or("unknown"),
            event.app_id()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticMetadataSource;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn event() -> BuildEvent {
        BuildEvent::from_value(&json!({
            "region": "us-east-1",
            "detail": {
                "appId": "app1",
                "branchName": "main",
                "jobId": "j1",
                "jobStatus": "SUCCEED"
            }
        }))
    }

    #[tokio::test]
    async fn test_missing_webhook_url_short_circuits() {
        let source = Arc::new(StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug"));
        let notifier =
            BuildNotifier::new(NotifierConfig::unconfigured()).with_metadata_source(source.clone());

        let response = notifier.handle(&event()).await;

        assert_eq!(response, InvocationResponse::missing_webhook_url());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_notify_without_webhook_url() {
        let notifier = BuildNotifier::new(NotifierConfig::unconfigured());
        let err = notifier
            .notify(&event(), &EnrichedMetadata::fallback(Some("app1")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            NotifierError::MissingConfiguration("SLACK_WEBHOOK_URL")
        ));
    }

    #[tokio::test]
    async fn test_delivered() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(200)
            .create_async()
            .await;

        let notifier = BuildNotifier::new(NotifierConfig::new(format!("{}/hook", server.url())));
        let response = notifier.handle(&event()).await;

        assert_eq!(response, InvocationResponse::delivered());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(500)
            .with_body("internal_error")
            .create_async()
            .await;

        let notifier = BuildNotifier::new(NotifierConfig::new(format!("{}/hook", server.url())));
        let response = notifier.handle(&event()).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "Failed to send notification.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_enrichment_disabled_skips_lookups() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_body(Matcher::Regex("App Name:\\* `app1`".to_string()))
            .with_status(200)
            .create_async()
            .await;

        let mut config = NotifierConfig::new(format!("{}/hook", server.url()));
        config.enrichment_enabled = false;
        let source = Arc::new(StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug"));
        let notifier = BuildNotifier::new(config).with_metadata_source(source.clone());

        let response = notifier.handle(&event()).await;

        assert_eq!(response, InvocationResponse::delivered());
        assert_eq!(source.calls(), 0);
        mock.assert_async().await;
    }
}
