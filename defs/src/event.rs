use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Region assumed when the EventBridge envelope does not carry one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// The parts of an Amplify "Build status change" EventBridge event that the
/// notifier reads. Everything else in the envelope is ignored.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct BuildEvent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_detail")]
    pub detail: Option<BuildEventDetail>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildEventDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub app_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub branch_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_status: Option<String>,
}

/// Any non-string value decodes as absent instead of failing the whole event.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_detail<'de, D>(deserializer: D) -> Result<Option<BuildEventDetail>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

impl BuildEvent {
    /// Decodes a raw trigger payload field by field. A field of the wrong
    /// type is absent; a payload that is not an object is an empty event.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn region_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(&self.region).unwrap_or(default)
    }

    pub fn app_id(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| non_empty(&d.app_id))
    }

    pub fn branch_name(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| non_empty(&d.branch_name))
    }

    pub fn job_id(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| non_empty(&d.job_id))
    }

    pub fn job_status(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| non_empty(&d.job_status))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
