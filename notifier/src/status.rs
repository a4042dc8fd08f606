use env_defs::{JobStatus, StatusDisplay};

pub fn classify(status: Option<&str>) -> StatusDisplay {
    match JobStatus::parse(status) {
        JobStatus::Succeeded => StatusDisplay {
            icon: "✅",
            phrase: "succeeded 🎉".to_string(),
        },
        JobStatus::Failed => StatusDisplay {
            icon: "❌",
            phrase: "failed 😢".to_string(),
        },
        JobStatus::Started => StatusDisplay {
            icon: "🚀",
            phrase: "started".to_string(),
        },
        other => StatusDisplay {
            icon: "ℹ️",
            phrase: other.to_string(),
        },
    }
}
