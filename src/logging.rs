//! Process-wide `tracing` subscriber.
//!
//! Installed once by the demo binary (or by a host that has no subscriber of
//! its own). Library code only emits events.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber: `info` normally, `debug` (or `RUST_LOG`)
/// when `debug` is set.
///
/// Later calls are ignored, as is an already-installed global subscriber.
pub fn init(debug: bool) {
    // RUST_LOG only counts in debug mode, so a stray variable in the user's
    // environment cannot flood the host's console.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
        tracing::info!("logging initialised");
    }
}
