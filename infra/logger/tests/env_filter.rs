use folio_logger::{LevelFilter, Logger, LoggerError};
use tracing::Level;

#[test]
fn env_filter_directs_component_logs() {
    // Rejected before anything is installed, so the second init below still succeeds.
    let err = Logger::builder()
        .name("folio-env-filter")
        .env_filter("folio_ui=chatty")
        .init()
        .expect_err("malformed directive");
    assert!(matches!(err, LoggerError::Filter { .. }), "{err}");

    let logger = Logger::builder()
        .name("folio-env-filter")
        .level(LevelFilter::INFO)
        .env_filter("folio_ui=debug,folio_kernel=warn")
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
    assert!(tracing::enabled!(target: "folio_ui::field", Level::DEBUG));
    assert!(!tracing::enabled!(target: "folio_ui::field", Level::TRACE));
    assert!(!tracing::enabled!(target: "folio_kernel::transition", Level::INFO));
    assert!(tracing::enabled!(target: "folio_kernel::transition", Level::WARN));
}
