use tracing_subscriber::EnvFilter;

/// Log filter for the binary: the `RUST_LOG` directives when they parse,
/// otherwise `info`.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
