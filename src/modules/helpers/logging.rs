use std::env;
use dotenvy::dotenv;
use fern::Dispatch;
use log::LevelFilter;

pub const DEFAULT_LOG_FILE: &str = "program.log";

/// # setup logging
/// log to stdout and to the file named by `LOG_FILE`.
/// the level is read from `LOGGING_LEVEL` and defaults to info.
pub fn setup_logging() -> Result<(), fern::InitError> {
    dotenv().ok();

    let verbosity = env::var("LOGGING_LEVEL").unwrap_or_default();
    let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

    Dispatch::new()
        .level(level_from_str(&verbosity))
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file)?)
        .apply()?;

    Ok(())
}

pub fn level_from_str(verbosity: &str) -> LevelFilter {
    match verbosity.trim().to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        // default to info
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_default_to_info() {
        assert_eq!(level_from_str(""), LevelFilter::Info);
        assert_eq!(level_from_str("loud"), LevelFilter::Info);
    }

    #[test]
    fn levels_are_case_insensitive() {
        assert_eq!(level_from_str("debug"), LevelFilter::Debug);
        assert_eq!(level_from_str(" WARN "), LevelFilter::Warn);
        assert_eq!(level_from_str("Off"), LevelFilter::Off);
    }
}
