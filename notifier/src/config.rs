use std::env;

use env_defs::DEFAULT_REGION;
use env_utils::{non_empty, parse_flag};

use crate::NotifierError;

pub const WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";

/// Settings for one notifier instance. Loaded once at cold start; the
/// pipeline never reads the process environment itself.
#[derive(Clone, Debug, PartialEq)]
pub struct NotifierConfig {
    pub webhook_url: Option<String>,
    /// Label shown in the message header, e.g. `staging`.
    pub environment: Option<String>,
    pub debug: bool,
    /// When off, no metadata lookups are made and the app id is shown as the
    /// app name.
    pub enrichment_enabled: bool,
    /// Attach a `thread_ts` hint so all messages of one job can be grouped.
    pub thread_grouping: bool,
    pub default_region: String,
}

impl NotifierConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        NotifierConfig {
            webhook_url: non_empty(Some(webhook_url.into())),
            ..NotifierConfig::unconfigured()
        }
    }

    /// Defaults with no webhook URL set.
    pub fn unconfigured() -> Self {
        NotifierConfig {
            webhook_url: None,
            environment: None,
            debug: false,
            enrichment_enabled: true,
            thread_grouping: true,
            default_region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = non_empty(Some(environment.into()));
        self
    }

    pub fn from_env() -> Self {
        NotifierConfig::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = NotifierConfig::unconfigured();
        NotifierConfig {
            webhook_url: non_empty(lookup(WEBHOOK_URL_VAR)),
            environment: non_empty(lookup("ENVIRONMENT")),
            debug: parse_flag(lookup("DEBUG").as_deref(), defaults.debug),
            enrichment_enabled: parse_flag(
                lookup("ENRICHMENT_ENABLED").as_deref(),
                defaults.enrichment_enabled,
            ),
            thread_grouping: parse_flag(
                lookup("SLACK_THREAD_GROUPING").as_deref(),
                defaults.thread_grouping,
            ),
            default_region: non_empty(lookup("DEFAULT_REGION"))
                .unwrap_or(defaults.default_region),
        }
    }

    pub fn webhook_url(&self) -> Result<&str, NotifierError> {
        self.webhook_url
            .as_deref()
            .ok_or(NotifierError::MissingConfiguration(WEBHOOK_URL_VAR))
    }
}
