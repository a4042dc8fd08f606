use async_trait::async_trait;
use aws_sdk_amplify::error::DisplayErrorContext;
use env_defs::{
    AppRecord, DomainAssociationRecord, JobRecord, JobSummaryRecord, MetadataError,
    MetadataSource,
};
use log::debug;

use crate::utils::{owned_non_empty, Present};

/// `MetadataSource` backed by the Amplify control-plane API.
///
/// The shared SDK configuration (credentials, retry and timeout settings) is
/// loaded once; each lookup gets a client pinned to the event's region.
#[derive(Clone, Debug)]
pub struct AmplifyMetadataSource {
    shared_config: aws_config::SdkConfig,
}

impl AmplifyMetadataSource {
    pub async fn from_env() -> Self {
        let shared_config = aws_config::from_env().load().await;
        AmplifyMetadataSource::new(shared_config)
    }

    pub fn new(shared_config: aws_config::SdkConfig) -> Self {
        AmplifyMetadataSource { shared_config }
    }

    fn client(&self, region: &str) -> aws_sdk_amplify::Client {
        let config = aws_sdk_amplify::config::Builder::from(&self.shared_config)
            .region(aws_config::Region::new(region.to_string()))
            .build();
        aws_sdk_amplify::Client::from_conf(config)
    }
}

#[async_trait]
impl MetadataSource for AmplifyMetadataSource {
    async fn get_app(&self, region: &str, app_id: &str) -> Result<AppRecord, MetadataError> {
        let resp = self
            .client(region)
            .get_app()
            .app_id(app_id)
            .send()
            .await
            .map_err(|e| MetadataError::request("GetApp", DisplayErrorContext(&e)))?;
        debug!("GetApp response: {:?}", resp);

        let app = resp.app().present().ok_or(MetadataError::MissingField {
            operation: "GetApp",
            field: "app",
        })?;

        Ok(AppRecord {
            name: owned_non_empty(app.name()),
        })
    }

    async fn list_domain_associations(
        &self,
        region: &str,
        app_id: &str,
    ) -> Result<Vec<DomainAssociationRecord>, MetadataError> {
        let resp = self
            .client(region)
            .list_domain_associations()
            .app_id(app_id)
            .send()
            .await
            .map_err(|e| {
                MetadataError::request("ListDomainAssociations", DisplayErrorContext(&e))
            })?;
        debug!("ListDomainAssociations response: {:?}", resp);

        let domains = resp
            .domain_associations()
            .iter()
            .filter_map(|association| owned_non_empty(association.domain_name()))
            .map(|domain_name| DomainAssociationRecord { domain_name })
            .collect();

        Ok(domains)
    }

    async fn get_job(
        &self,
        region: &str,
        app_id: &str,
        branch_name: &str,
        job_id: &str,
    ) -> Result<JobRecord, MetadataError> {
        let resp = self
            .client(region)
            .get_job()
            .app_id(app_id)
            .branch_name(branch_name)
            .job_id(job_id)
            .send()
            .await
            .map_err(|e| MetadataError::request("GetJob", DisplayErrorContext(&e)))?;
        debug!("GetJob response: {:?}", resp);

        let job = resp.job().present().ok_or(MetadataError::MissingField {
            operation: "GetJob",
            field: "job",
        })?;

        // The Amplify job model only carries the commit message in its summary
        let summary = job.summary().present().map(|summary| JobSummaryRecord {
            commit_message: owned_non_empty(summary.commit_message()),
        });

        Ok(JobRecord {
            summary,
            commit_message: None,
        })
    }
}
