mod env;
mod logging;

pub use env::{non_empty, parse_flag};
pub use logging::{parse_level, setup_logging};
