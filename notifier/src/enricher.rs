use std::sync::Arc;

use env_defs::{EnrichedMetadata, JobRecord, MetadataSource};
use log::{debug, warn};

/// Resolves display metadata for a build event.
///
/// The three lookups run concurrently and fail independently: a failed
/// lookup only leaves its own field at the fallback. Nothing here ever
/// returns an error to the caller.
#[derive(Clone)]
pub struct Enricher {
    source: Arc<dyn MetadataSource>,
}

impl Enricher {
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Enricher { source }
    }

    pub async fn enrich(
        &self,
        region: &str,
        app_id: Option<&str>,
        branch_name: Option<&str>,
        job_id: Option<&str>,
    ) -> EnrichedMetadata {
        let app_id = match app_id {
            Some(app_id) => app_id,
            None => {
                warn!("Event has no appId, skipping metadata lookups");
                return EnrichedMetadata::default();
            }
        };

        let (app_name, domain_name, commit_message) = tokio::join!(
            self.app_name(region, app_id),
            self.domain_name(region, app_id),
            self.commit_message(region, app_id, branch_name, job_id),
        );

        EnrichedMetadata {
            app_name: Some(app_name),
            domain_name,
            commit_message,
        }
    }

    async fn app_name(&self, region: &str, app_id: &str) -> String {
        match self.source.get_app(region, app_id).await {
            Ok(app) => {
                debug!("App record for {}: {:?}", app_id, app);
                app.name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| app_id.to_string())
            }
            Err(e) => {
                warn!("Failed to fetch app details for {}: {}", app_id, e);
                app_id.to_string()
            }
        }
    }

    async fn domain_name(&self, region: &str, app_id: &str) -> Option<String> {
        match self.source.list_domain_associations(region, app_id).await {
            Ok(domains) => {
                debug!("Domain associations for {}: {:?}", app_id, domains);
                domains
                    .into_iter()
                    .map(|domain| domain.domain_name)
                    .find(|name| !name.is_empty())
            }
            Err(e) => {
                warn!("Failed to fetch domain associations for {}: {}", app_id, e);
                None
            }
        }
    }

    async fn commit_message(
        &self,
        region: &str,
        app_id: &str,
        branch_name: Option<&str>,
        job_id: Option<&str>,
    ) -> Option<String> {
        let job_id = job_id?;
        let branch_name = match branch_name {
            Some(branch_name) => branch_name,
            None => {
                warn!("Cannot fetch job {} of {} without a branch name", job_id, app_id);
                return None;
            }
        };

        match self
            .source
            .get_job(region, app_id, branch_name, job_id)
            .await
        {
            Ok(job) => {
                debug!("Job record for {}: {:?}", job_id, job);
                commit_message_of(job)
            }
            Err(e) => {
                warn!("Failed to fetch job {} for {}: {}", job_id, app_id, e);
                None
            }
        }
    }
}

/// Prefers the summary's commit message and falls back to the job's own.
fn commit_message_of(job: JobRecord) -> Option<String> {
    job.summary
        .and_then(|summary| summary.commit_message)
        .filter(|message| !message.is_empty())
        .or(job.commit_message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticMetadataSource;
    use env_defs::{AppRecord, DomainAssociationRecord, JobSummaryRecord};
    use pretty_assertions::assert_eq;

    fn enricher_with(source: StaticMetadataSource) -> (Enricher, Arc<StaticMetadataSource>) {
        let source = Arc::new(source);
        (Enricher::new(source.clone()), source)
    }

    #[tokio::test]
    async fn test_all_lookups_succeed() {
        let (enricher, source) =
            enricher_with(StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug"));

        let metadata = enricher
            .enrich("us-east-1", Some("app1"), Some("main"), Some("j1"))
            .await;

        assert_eq!(
            metadata,
            EnrichedMetadata {
                app_name: Some("MyApp".to_string()),
                domain_name: Some("my.app.com".to_string()),
                commit_message: Some("Fix bug".to_string()),
            }
        );
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_all_lookups_fail() {
        let (enricher, source) = enricher_with(StaticMetadataSource::failing());

        let metadata = enricher
            .enrich("us-east-1", Some("app1"), Some("main"), Some("j1"))
            .await;

        assert_eq!(metadata, EnrichedMetadata::fallback(Some("app1")));
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_block_the_others() {
        let mut source = StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug");
        source.app = None;
        let (enricher, _) = enricher_with(source);

        let metadata = enricher
            .enrich("us-east-1", Some("app1"), Some("main"), Some("j1"))
            .await;
        assert_eq!(metadata.app_name.as_deref(), Some("app1"));
        assert_eq!(metadata.domain_name.as_deref(), Some("my.app.com"));
        assert_eq!(metadata.commit_message.as_deref(), Some("Fix bug"));

        let mut source = StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug");
        source.domains = None;
        let (enricher, _) = enricher_with(source);

        let metadata = enricher
            .enrich("us-east-1", Some("app1"), Some("main"), Some("j1"))
            .await;
        assert_eq!(metadata.app_name.as_deref(), Some("MyApp"));
        assert_eq!(metadata.domain_name, None);
        assert_eq!(metadata.commit_message.as_deref(), Some("Fix bug"));
    }

    #[tokio::test]
    async fn test_failed_job_lookup_keeps_app_and_domain() {
        let mut source = StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug");
        source.job = None;
        let (enricher, source) = enricher_with(source);

        let metadata = enricher
            .enrich("us-east-1", Some("app1"), Some("main"), Some("j1"))
            .await;

        assert_eq!(
            metadata,
            EnrichedMetadata {
                app_name: Some("MyApp".to_string()),
                domain_name: Some("my.app.com".to_string()),
                commit_message: None,
            }
        );
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_job_lookup_skipped_without_job_id() {
        let (enricher, source) =
            enricher_with(StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug"));

        let metadata = enricher
            .enrich("us-east-1", Some("app1"), Some("main"), None)
            .await;

        assert_eq!(metadata.commit_message, None);
        assert_eq!(metadata.app_name.as_deref(), Some("MyApp"));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_no_lookups_without_app_id() {
        let (enricher, source) =
            enricher_with(StaticMetadataSource::resolving("MyApp", "my.app.com", "Fix bug"));

        let metadata = enricher
            .enrich("us-east-1", None, Some("main"), Some("j1"))
            .await;

        assert_eq!(metadata, EnrichedMetadata::default());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_first_domain_and_empty_name_fallback() {
        let mut source = StaticMetadataSource::failing();
        source.app = Some(AppRecord {
            name: Some(String::new()),
        });
        source.domains = Some(vec![
            DomainAssociationRecord {
                domain_name: "first.example.com".to_string(),
            },
            DomainAssociationRecord {
                domain_name: "second.example.com".to_string(),
            },
        ]);
        source.job = Some(JobRecord::default());
        let (enricher, _) = enricher_with(source);

        let metadata = enricher
            .enrich("eu-west-1", Some("app1"), Some("main"), Some("j1"))
            .await;

        assert_eq!(metadata.app_name.as_deref(), Some("app1"));
        assert_eq!(metadata.domain_name.as_deref(), Some("first.example.com"));
        assert_eq!(metadata.commit_message, None);
    }

    #[test]
    fn test_commit_message_fallback_order() {
        let nested = JobRecord {
            summary: Some(JobSummaryRecord {
                commit_message: Some("nested".to_string()),
            }),
            commit_message: Some("top".to_string()),
        };
        assert_eq!(commit_message_of(nested), Some("nested".to_string()));

        let top_only = JobRecord {
            summary: Some(JobSummaryRecord {
                commit_message: None,
            }),
            commit_message: Some("top".to_string()),
        };
        assert_eq!(commit_message_of(top_only), Some("top".to_string()));

        let empty_nested = JobRecord {
            summary: Some(JobSummaryRecord {
                commit_message: Some(String::new()),
            }),
            commit_message: Some("top".to_string()),
        };
        assert_eq!(commit_message_of(empty_nested), Some("top".to_string()));

        assert_eq!(commit_message_of(JobRecord::default()), None);
    }
}
