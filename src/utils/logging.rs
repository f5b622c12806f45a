// ============================================================================
// Logging Setup
// Optional tracing-subscriber initialisation (requires "logging" feature)
// ============================================================================
//
// The library only emits `tracing` events (debug/trace, error paths only).
// Binaries, demos and benches can call `init_logging` to see them; filtering
// follows `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber driven by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed, so it is
/// safe to call more than once.
#[must_use = "false means another subscriber is already installed"]
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init_logging();
        assert!(!init_logging());
    }
}
