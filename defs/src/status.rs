use std::fmt;

/// Amplify job status as carried in the event's `jobStatus` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Succeeded,
    Failed,
    Started,
    Other(String),
    Unknown,
}

impl JobStatus {
    pub fn parse(status: Option<&str>) -> Self {
        match status {
            // Amplify reports success as SUCCEED
            Some("SUCCEED") | Some("SUCCEEDED") => JobStatus::Succeeded,
            Some("FAILED") => JobStatus::Failed,
            Some("STARTED") => JobStatus::Started,
            Some(other) if !other.is_empty() => JobStatus::Other(other.to_string()),
            _ => JobStatus::Unknown,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Succeeded => write!(f, "SUCCEED"),
            JobStatus::Failed => write!(f, "FAILED"),
            JobStatus::Started => write!(f, "STARTED"),
            JobStatus::Other(status) => write!(f, "{}", status),
            JobStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Icon and phrase shown for a job status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusDisplay {
    pub icon: &'static str,
    pub phrase: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(JobStatus::parse(Some("SUCCEED")), JobStatus::Succeeded);
        assert_eq!(JobStatus::parse(Some("SUCCEEDED")), JobStatus::Succeeded);
        assert_eq!(JobStatus::parse(Some("FAILED")), JobStatus::Failed);
        assert_eq!(JobStatus::parse(Some("STARTED")), JobStatus::Started);
    }

    #[test]
    fn test_parse_other_and_absent() {
        assert_eq!(
            JobStatus::parse(Some("CANCELLED")),
            JobStatus::Other("CANCELLED".to_string())
        );
        assert_eq!(JobStatus::parse(Some("")), JobStatus::Unknown);
        assert_eq!(JobStatus::parse(None), JobStatus::Unknown);
        // Matching is case sensitive, like the platform's enumeration
        assert_eq!(
            JobStatus::parse(Some("failed")),
            JobStatus::Other("failed".to_string())
        );
    }
}
