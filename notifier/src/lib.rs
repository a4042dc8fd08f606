mod config;
mod enricher;
mod errors;
mod handler;
mod message;
mod status;
#[cfg(any(test, feature = "test-mode"))]
pub mod testing;
mod webhook;

pub use config::NotifierConfig;
pub use enricher::Enricher;
pub use errors::{DeliveryResult, NotifierError};
pub use handler::BuildNotifier;
pub use message::{build_console_url, build_message, thread_id};
pub use status::classify;
pub use webhook::WebhookClient;
