use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// filter used by `--verbose`
pub const VERBOSE_FILTER: &str =
    "mortgage_calculator_rs=debug,mortgage=debug,tower_http=debug,info";

/// install the global subscriber; `RUST_LOG` wins over the configured filter
pub fn init_logger(settings: &Settings, verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        settings.log_filter.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let registry = tracing_subscriber::registry().with(filter);
    if settings.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
