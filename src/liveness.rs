use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

const READY_WINDOW: Duration = Duration::from_secs(60);

/// Warns once, purely for diagnostics, if the gateway connection has not
/// become ready within a fixed window after startup. Takes no corrective
/// action; serenity keeps reconnecting on its own.
pub fn spawn_watchdog(ready: Arc<AtomicBool>) {
    tokio::spawn(async move {
        sleep(READY_WINDOW).await;
        if ready.load(Ordering::SeqCst) {
            debug!("Gateway became ready within the startup window");
        } else {
            warn!(
                "Gateway connection not ready after {}s; check the token and network reachability",
                READY_WINDOW.as_secs()
            );
        }
    });
}
