/// Filter used when `RUST_LOG` is unset: only warnings, except the domain's
/// add/update confirmations.
pub const DEFAULT_LOG_FILTER: &str = "warn,inventory_tracker::domain=info";

/// Install the global tracing subscriber.
///
/// Filter comes from `RUST_LOG` (default [`DEFAULT_LOG_FILTER`]). Output goes
/// to stderr; it shares the terminal with the menu unless redirected
/// (e.g. `2>inventory.log`).
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
