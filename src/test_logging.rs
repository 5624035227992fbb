use tracing_subscriber::EnvFilter;

// Completed inserts log at debug. Per-edge events need `RUST_LOG=radix_index=trace`.
const DEFAULT_DIRECTIVE: &str = "radix_index=debug";

/// Installs a test-writer subscriber once per test binary. `RUST_LOG` overrides the default of
/// `debug` for this crate.
pub(crate) fn setup_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    use crate::test_logging::DEFAULT_DIRECTIVE;

    #[test]
    fn test_default_filter_stops_at_debug() {
        let filter = EnvFilter::new(DEFAULT_DIRECTIVE);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
