//! Global subscriber initialization.

use std::sync::OnceLock;
use tracing::Level;

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs a stderr fmt subscriber at `level`. `None` leaves logging off.
/// Later calls are no-ops.
pub fn init(level: Option<Level>) {
    let Some(level) = level else {
        return;
    };
    if LOGGING_INITIALIZED.get().is_some() {
        return;
    }

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        tracing::debug!(error = %error, "Tracing subscriber already initialized");
    }

    let _ = LOGGING_INITIALIZED.set(());
}
