use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per line, for log collectors.
    Json,
}

/// Filter used when `RUST_LOG` is unset. `--verbose` beats the configured level.
pub fn default_directive(verbose: bool, configured_level: Option<&str>) -> String {
    let level = if verbose {
        "debug"
    } else {
        configured_level.unwrap_or("info")
    };
    format!("bookmarks_ui={}", level)
}

/// Installs the global subscriber. Logs go to stderr so command output stays clean.
pub fn init(format: LogFormat, directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
