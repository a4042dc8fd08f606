use env_defs::{ActionElement, Block, BuildEvent, EnrichedMetadata, SlackMessage, TextObject};

use crate::{classify, NotifierConfig};

const UNKNOWN: &str = "unknown";

/// Link to the job's deployment history in the Amplify console. Absent ids
/// are rendered as `unknown`; the URL is not checked for reachability.
pub fn build_console_url(region: &str, app_id: Option<&str>, branch_name: Option<&str>) -> String {
    format!(
        "https://{}.console.aws.amazon.com/amplify/apps/{}/branches/{}/deployments",
        region,
        app_id.unwrap_or(UNKNOWN),
        branch_name.unwrap_or(UNKNOWN)
    )
}

/// Identifier shared by all messages about one job. Only produced when the
/// event names the job.
pub fn thread_id(app_name: &str, job_id: Option<&str>) -> Option<String> {
    job_id.map(|job_id| format!("{}-{}", app_name, job_id))
}

pub fn build_message(
    event: &BuildEvent,
    metadata: &EnrichedMetadata,
    config: &NotifierConfig,
) -> SlackMessage {
    let region = event.region_or(&config.default_region);
    let branch_name = event.branch_name();
    let app_name = metadata
        .app_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or(event.app_id())
        .unwrap_or(UNKNOWN);
    let status = classify(event.job_status());

    let header = match config.environment.as_deref() {
        Some(environment) => format!(
            "{} Amplify Build {} ({})",
            status.icon, status.phrase, environment
        ),
        None => format!("{} Amplify Build {}", status.icon, status.phrase),
    };

    let mut fields = vec![
        TextObject::mrkdwn(format!("*App Name:* `{}`", app_name)),
        TextObject::mrkdwn(format!("*Branch:* `{}`", branch_name.unwrap_or(UNKNOWN))),
    ];
    if let Some(domain_name) = &metadata.domain_name {
        fields.push(TextObject::mrkdwn(format!("*Domain:* https://{}", domain_name)));
    }

    let mut blocks = vec![
        Block::Header {
            text: TextObject::plain_text(header),
        },
        Block::Section { fields },
    ];

    if let Some(commit_message) = &metadata.commit_message {
        blocks.push(Block::Context {
            elements: vec![TextObject::mrkdwn(format!("*Commit:* `{}`", commit_message))],
        });
    }

    blocks.push(Block::Actions {
        elements: vec![ActionElement::Button {
            text: TextObject::plain_text("View Build Details"),
            style: Some("primary".to_string()),
            url: build_console_url(region, event.app_id(), branch_name),
            action_id: "view_build_button".to_string(),
        }],
    });
    blocks.push(Block::Context {
        elements: vec![TextObject::mrkdwn(format!("Occurred in region: {}", region))],
    });

    let thread_ts = if config.thread_grouping {
        thread_id(app_name, event.job_id())
    } else {
        None
    };

    SlackMessage {
        text: format!(
            "Amplify Build for {} {}",
            branch_name.unwrap_or("unknown branch"),
            status.phrase
        ),
        thread_ts,
        blocks,
    }
}
