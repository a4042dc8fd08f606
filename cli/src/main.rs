mod local_event;

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use env_aws::AmplifyMetadataSource;
use env_defs::BuildEvent;
use env_utils::setup_logging;
use inquire::Text;
use notifier::{BuildNotifier, NotifierConfig};

/// Runs the build notifier locally against a sample Amplify event.
#[derive(Parser, Debug)]
#[command(name = "amplify-notifier-local", version = env!("APP_VERSION"))]
struct Args {
    /// Amplify app id to put in the event (prompted for when omitted)
    #[arg(long, env = "AMPLIFY_APP_ID")]
    app_id: Option<String>,

    /// Slack incoming webhook URL (prompted for when omitted)
    #[arg(long, env = "SLACK_WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Environment label shown in the message header (prompted for when omitted)
    #[arg(long, env = "ENVIRONMENT")]
    environment: Option<String>,

    /// Sample EventBridge event to send
    #[arg(long, default_value = "test-event.json")]
    event_file: PathBuf,

    /// Override the job status of the sample event, e.g. FAILED
    #[arg(long)]
    job_status: Option<String>,

    /// Skip the Amplify lookups and show the app id as the app name
    #[arg(long)]
    no_enrichment: bool,

    /// Print debug logs, including the outgoing message
    #[arg(long)]
    debug: bool,
}

fn prompt_missing(value: Option<String>, message: &str, default: Option<&str>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let mut prompt = Text::new(message);
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    Ok(prompt.prompt()?)
}

async fn run(args: Args) -> Result<()> {
    println!("Lambda Function Local Testing\n");

    let app_id = prompt_missing(args.app_id, "Enter Amplify App ID:", None)?;
    let webhook_url = prompt_missing(args.webhook_url, "Enter Slack Webhook URL:", None)?;
    let environment =
        prompt_missing(args.environment, "Enter Environment:", Some("development"))?;

    let mut config = NotifierConfig::new(webhook_url).with_environment(environment.as_str());
    config.debug = args.debug;
    config.enrichment_enabled = !args.no_enrichment;
    setup_logging(config.debug)?;

    let payload = local_event::with_app_id(
        local_event::load_event(&args.event_file)?,
        &app_id,
        args.job_status.as_deref(),
    );

    println!("\nRunning Lambda function with:");
    println!("- App ID: {}", app_id);
    println!("- Environment: {}", environment);
    println!("- Test Event: {}", serde_json::to_string_pretty(&payload)?);
    println!("\n--- Lambda Execution ---");

    let source = AmplifyMetadataSource::from_env().await;
    let notifier = BuildNotifier::new(config).with_metadata_source(Arc::new(source));
    let response = notifier.handle(&BuildEvent::from_value(&payload)).await;

    println!("\n--- Result ---");
    println!(
        "Lambda function result: {}",
        serde_json::to_string_pretty(&response)?
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("\n--- Error ---");
        eprintln!("Error running Lambda function: {:?}", e);
        std::process::exit(1);
    }
}
