use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Build the stderr subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `verbose` picks debug
/// over info.
pub fn subscriber(verbose: bool, ansi_colors: bool) -> impl Subscriber + Send + Sync {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .finish()
}

/// Install the stderr subscriber as the global default. Safe to call more
/// than once.
pub fn init_logging(verbose: bool, ansi_colors: bool) {
    if tracing::subscriber::set_global_default(subscriber(verbose, ansi_colors)).is_err() {
        tracing::debug!("Logger already initialized");
    }
}
