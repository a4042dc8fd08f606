use std::env;

use chrono::Local;
use log::LevelFilter;

pub fn parse_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // Default to Warn if variable is unset or has an unrecognized value
    }
}

/// Routes the `log` facade to stderr. `debug` forces the Debug level,
/// otherwise `LOG_LEVEL` decides. Calling this again after a logger is
/// installed is a no-op.
pub fn setup_logging(debug: bool) -> Result<(), fern::InitError> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        parse_level(env::var("LOG_LEVEL").ok().as_deref())
    };

    let stderr_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if fern::Dispatch::new().chain(stderr_config).apply().is_err() {
        // A logger is already installed; only adjust the level
        log::set_max_level(level);
    }

    Ok(())
}
