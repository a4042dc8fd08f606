use std::sync::Arc;

use env_aws::AmplifyMetadataSource;
use env_defs::BuildEvent;
use env_utils::setup_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::debug;
use notifier::{BuildNotifier, NotifierConfig};
use serde_json::Value;

async fn func(notifier: &BuildNotifier, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    debug!(
        "Received event (request {}): {}",
        context.request_id,
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
    );

    let event = BuildEvent::from_value(&payload);
    let response = notifier.handle(&event).await;

    Ok(serde_json::to_value(response)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = NotifierConfig::from_env();
    setup_logging(config.debug)?;

    let source = AmplifyMetadataSource::from_env().await;
    let notifier = BuildNotifier::new(config).with_metadata_source(Arc::new(source));
    let notifier = &notifier;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        func(notifier, event).await
    }))
    .await?;

    Ok(())
}
