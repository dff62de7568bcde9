use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(if debug { Level::DEBUG } else { Level::INFO })
            .init();
    });
}
