use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Amplify {operation} request failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },

    #[error("Amplify {operation} response is missing {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error("Cannot run Amplify {operation} without {parameter}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },
}

impl MetadataError {
    pub fn request(operation: &'static str, err: impl std::fmt::Display) -> Self {
        MetadataError::Request {
            operation,
            message: err.to_string(),
        }
    }
}
