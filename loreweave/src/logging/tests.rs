use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::parse_log_level;
use std::sync::Once;

// Use this to ensure init is only called once across all tests
static INIT: Once = Once::new();

#[test]
fn test_init_console_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            file: None,
            stdout: true,
        };

        assert!(crate::logging::init(&config).is_ok());
    });
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("info").unwrap(), LogLevel::Info);
    assert_eq!(parse_log_level("WARN").unwrap(), LogLevel::Warn);
    assert!(parse_log_level("loud").is_err());
}
