//! Telemetry helpers for applications embedding `chartpath`.
//!
//! Tracing setup stays explicit and opt-in. The crate itself only emits
//! `debug`/`trace` events (bounds refinement, segment splitting); hosts that
//! want to see them can install the default subscriber below or wire their
//! own `tracing` subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled, honoring `RUST_LOG` and falling back to `filter`.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or
/// if a global subscriber was already set by the host application.
#[must_use]
pub fn init_tracing_with_filter(filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

        return tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = filter;
        false
    }
}

/// Initializes the default subscriber with bounds/interpolation debug events
/// from this crate enabled.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("chartpath=debug")
}
