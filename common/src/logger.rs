// Shared logging setup, used by every binary in the workspace. Mirrors the
// CombinedLogger (terminal + file) pattern used throughout the reference
// NEAT tooling this crate was split out of.
use crate::file_tools::check_parent;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::io;

/// Parses one of Trace/Debug/Info/Warn/Error/Off (case-insensitive) into a
/// `LevelFilter`. Unknown strings are an error so CLI parsing can surface
/// them cleanly rather than panicking deep in `init`.
pub fn parse_level_filter(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        other => Err(format!(
            "Unknown log level '{other}', expected one of Trace, Debug, Info, Warn, Error, Off"
        )),
    }
}

/// Initializes the process-wide logger: a colored terminal logger at
/// `level` writing to stderr, and a plain-text file logger at `level`
/// writing to `log_dest`. Informational messages (`log::info!`) are how
/// the `#`-prefixed progress notices required of the repeat-search driver
/// reach the error channel.
pub fn init(level: LevelFilter, log_dest: &str) -> io::Result<()> {
    check_parent(log_dest)?;
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        WriteLogger::new(level, Config::default(), File::create(log_dest)?),
    ];
    CombinedLogger::init(loggers).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_filter_accepts_case_insensitive() {
        assert_eq!(parse_level_filter("Info").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level_filter("OFF").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn test_parse_level_filter_rejects_unknown() {
        assert!(parse_level_filter("verbose").is_err());
    }
}
