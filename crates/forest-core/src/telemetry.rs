// File: crates/forest-core/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for binaries embedding `forest-core`.

/// Installs a compact `tracing` subscriber writing to stderr when the `telemetry`
/// feature is enabled. The filter comes from `RUST_LOG`, defaulting to `info`.
///
/// Returns `false` when the feature is disabled or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
