use std::sync::Arc;

use env_defs::BuildEvent;
use notifier::testing::StaticMetadataSource;
use notifier::{BuildNotifier, NotifierConfig};
use serde_json::{json, Value};

/// EventBridge payload for an Amplify build status change.
pub fn amplify_event(region: &str, app_id: &str, branch: &str, job_id: &str, status: &str) -> Value {
    json!({
        "version": "0",
        "id": "5a7c2d3e-1b4f-4e8a-9c6d-2f1e0a9b8c7d",
        "detail-type": "Amplify Deployment Status Change",
        "source": "aws.amplify",
        "account": "123456789012",
        "region": region,
        "resources": [format!(
            "arn:aws:amplify:{}:123456789012:apps/{}/branches/{}/jobs/{}",
            region, app_id, branch, job_id
        )],
        "detail": {
            "appId": app_id,
            "branchName": branch,
            "jobId": job_id,
            "jobStatus": status
        }
    })
}

pub fn scenario_event() -> BuildEvent {
    BuildEvent::from_value(&amplify_event("us-east-1", "app1", "main", "j1", "SUCCEED"))
}

pub fn build_notifier(config: NotifierConfig, source: Arc<StaticMetadataSource>) -> BuildNotifier {
    BuildNotifier::new(config).with_metadata_source(source)
}
