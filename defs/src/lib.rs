mod errors;
mod event;
mod message;
mod metadata;
mod response;
mod status;

pub use errors::MetadataError;
pub use event::{BuildEvent, BuildEventDetail, DEFAULT_REGION};
pub use message::{ActionElement, Block, SlackMessage, TextObject};
pub use metadata::{
    AppRecord, DomainAssociationRecord, EnrichedMetadata, JobRecord, JobSummaryRecord,
    MetadataSource,
};
pub use response::{
    InvocationResponse, DELIVERED_BODY, DELIVERY_FAILED_BODY, MISSING_WEBHOOK_BODY,
};
pub use status::{JobStatus, StatusDisplay};
