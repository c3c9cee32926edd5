//! Tracing setup for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to `main`. Logs go to stderr so stdout stays clean for generated output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between debug and
/// warn for this crate.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("p2p_wizard=debug,info")
            } else {
                EnvFilter::try_new("p2p_wizard=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
