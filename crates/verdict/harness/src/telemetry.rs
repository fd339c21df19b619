//! Tracing setup for test binaries.

use crate::config::HarnessConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a fmt subscriber that writes through the test capture.
///
/// `RUST_LOG` wins over `config.log_level`. Calling this more than once is
/// harmless; only the first call installs a subscriber. Returns whether
/// this call installed it.
pub fn init_tracing(config: &HarnessConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer().with_target(true))
        .try_init()
        .is_ok()
}
