use async_trait::async_trait;

use crate::MetadataError;

/// Application details returned by a `GetApp` lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppRecord {
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DomainAssociationRecord {
    pub domain_name: String,
}

/// Job details returned by a `GetJob` lookup. The commit message can show up
/// either in the nested summary or at the top level of the job.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobRecord {
    pub summary: Option<JobSummaryRecord>,
    pub commit_message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobSummaryRecord {
    pub commit_message: Option<String>,
}

/// Whatever the enrichment lookups managed to resolve for one event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnrichedMetadata {
    pub app_name: Option<String>,
    pub domain_name: Option<String>,
    pub commit_message: Option<String>,
}

impl EnrichedMetadata {
    /// Metadata carrying only the app id as display name.
    pub fn fallback(app_id: Option<&str>) -> Self {
        EnrichedMetadata {
            app_name: app_id.map(str::to_string),
            ..Default::default()
        }
    }
}

/// Read-only view of the hosting platform's app, domain and job records.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn get_app(&self, region: &str, app_id: &str) -> Result<AppRecord, MetadataError>;

    async fn list_domain_associations(
        &self,
        region: &str,
        app_id: &str,
    ) -> Result<Vec<DomainAssociationRecord>, MetadataError>;

    async fn get_job(
        &self,
        region: &str,
        app_id: &str,
        branch_name: &str,
        job_id: &str,
    ) -> Result<JobRecord, MetadataError>;
}
