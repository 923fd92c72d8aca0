use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::constants::LOG_ENV;

/// Level used when `TEXCRYPT_LOG` is unset.
pub fn default_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber.
///
/// Logs never go to stdout, which carries note text in read-only mode.
pub fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}
