/// Installs a `tracing_subscriber::fmt` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info`. Calling it again once a subscriber is installed is a no-op.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
