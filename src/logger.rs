//! Logging setup for the gymdesk binary

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the crate's own
/// level to debug. Output goes to stderr so stdout stays scriptable.
pub fn init(verbose: u8) {
    let default_filter = if verbose > 0 {
        "gymdesk=debug,info"
    } else {
        "gymdesk=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
