mod amplify;
mod utils;

pub use amplify::AmplifyMetadataSource;
