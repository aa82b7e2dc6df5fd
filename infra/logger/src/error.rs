use std::borrow::Cow;

/// Why the global subscriber could not be installed.
#[folio_derive::folio_error]
pub enum LoggerError {
    /// The log directory does not exist and could not be created.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Log directory error{}: {source}", format_context(context))]
    LogDirectory { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Rolling file appender error{}: {source}", format_context(context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A subscriber was already installed in this process (or page).
    #[error("Tracing subscriber error{}: {source}", format_context(context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// An `env_filter` directive such as `folio_ui=debug` did not parse.
    #[error("Invalid env filter{}: {source}", format_context(context))]
    Filter { source: tracing_subscriber::filter::ParseError, context: Option<Cow<'static, str>> },

    #[error("Invalid logger configuration{}: {message}", format_context(context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
