use std::{fs, path::Path};

use anyhow::Context;
use serde_json::{json, Value};

/// Reads a sample EventBridge event from disk.
pub fn load_event(path: &Path) -> Result<Value, anyhow::Error> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read test event from {}", path.display()))?;
    let event = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse test event in {}", path.display()))?;
    Ok(event)
}

/// Points a sample event at `app_id`, the same way the platform would fill
/// `detail.appId` and the job ARN in `resources`.
pub fn with_app_id(mut event: Value, app_id: &str, job_status: Option<&str>) -> Value {
    if !event.is_object() {
        event = json!({});
    }
    if !event["detail"].is_object() {
        event["detail"] = json!({});
    }

    event["detail"]["appId"] = json!(app_id);
    if let Some(job_status) = job_status {
        event["detail"]["jobStatus"] = json!(job_status);
    }
    event["resources"] = json!([format!(
        "arn:aws:amplify:us-east-1:123456789012:apps/{}/branches/main/jobs/1",
        app_id
    )]);

    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_app_id_overrides_detail_and_resources() {
        let event = json!({
            "region": "us-east-1",
            "resources": ["arn:aws:amplify:us-east-1:123456789012:apps/old/branches/main/jobs/1"],
            "detail": { "appId": "old", "branchName": "main", "jobId": "1", "jobStatus": "SUCCEED" }
        });

        let event = with_app_id(event, "d1a2b3c4", None);

        assert_eq!(event["detail"]["appId"], json!("d1a2b3c4"));
        assert_eq!(event["detail"]["jobStatus"], json!("SUCCEED"));
        assert_eq!(
            event["resources"],
            json!(["arn:aws:amplify:us-east-1:123456789012:apps/d1a2b3c4/branches/main/jobs/1"])
        );
    }

    #[test]
    fn test_with_app_id_fills_missing_detail() {
        let event = with_app_id(json!({ "region": "eu-west-1" }), "app1", Some("FAILED"));

        assert_eq!(
            event["detail"],
            json!({ "appId": "app1", "jobStatus": "FAILED" })
        );
        assert_eq!(event["region"], json!("eu-west-1"));
    }

    #[test]
    fn test_load_event_reports_missing_file() {
        let err = load_event(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.json"));
    }

    #[test]
    fn test_bundled_sample_event_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-event.json");
        let event = load_event(&path).unwrap();
        assert_eq!(event["detail"]["branchName"], json!("main"));
    }
}
