//! Setup logging untuk binary
//!
//! Library hanya memanggil macro `tracing`; subscriber dipasang oleh
//! binary. Level dibaca dari `RUST_LOG`, fallback ke `info` atau `debug`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Memasang subscriber global. Aman dipanggil lebih dari sekali; panggilan
/// berikutnya diabaikan.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
