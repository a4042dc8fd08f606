use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use env_defs::{
    AppRecord, DomainAssociationRecord, JobRecord, JobSummaryRecord, MetadataError,
    MetadataSource,
};

/// In-memory `MetadataSource`. A lookup whose record is `None` fails.
#[derive(Debug, Default)]
pub struct StaticMetadataSource {
    pub app: Option<AppRecord>,
    pub domains: Option<Vec<DomainAssociationRecord>>,
    pub job: Option<JobRecord>,
    calls: AtomicUsize,
}

impl StaticMetadataSource {
    pub fn resolving(app_name: &str, domain_name: &str, commit_message: &str) -> Self {
        StaticMetadataSource {
            app: Some(AppRecord {
                name: Some(app_name.to_string()),
            }),
            domains: Some(vec![DomainAssociationRecord {
                domain_name: domain_name.to_string(),
            }]),
            job: Some(JobRecord {
                summary: Some(JobSummaryRecord {
                    commit_message: Some(commit_message.to_string()),
                }),
                commit_message: None,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        StaticMetadataSource::default()
    }

    /// Number of lookups made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record<T: Clone>(
        &self,
        operation: &'static str,
        record: &Option<T>,
    ) -> Result<T, MetadataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        record
            .clone()
            .ok_or_else(|| MetadataError::request(operation, "AccessDeniedException"))
    }
}

#[async_trait]
impl MetadataSource for StaticMetadataSource {
    async fn get_app(&self, _region: &str, _app_id: &str) -> Result<AppRecord, MetadataError> {
        self.record("GetApp", &self.app)
    }

    async fn list_domain_associations(
        &self,
        _region: &str,
        _app_id: &str,
    ) -> Result<Vec<DomainAssociationRecord>, MetadataError> {
        self.record("ListDomainAssociations", &self.domains)
    }

    async fn get_job(
        &self,
        _region: &str,
        _app_id: &str,
        _branch_name: &str,
        _job_id: &str,
    ) -> Result<JobRecord, MetadataError> {
        self.record("GetJob", &self.job)
    }
}
