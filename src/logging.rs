use tracing_subscriber::EnvFilter;

/// Initialize diagnostics on stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "picfeed=debug" } else { "picfeed=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
