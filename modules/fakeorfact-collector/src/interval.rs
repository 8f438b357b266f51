use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::collector::Collector;

const FALLBACK_INTERVAL: Duration = Duration::from_secs(15 * 3600);

/// Start the recurring collection loop.
///
/// The first pass runs immediately. Each tick spawns its own pass, so a pass
/// that outlives the interval may overlap the next one; the store's URL
/// uniqueness keeps that safe.
pub fn start_collection_interval(collector: Arc<Collector>, period: Duration) -> JoinHandle<()> {
    let period = if period.is_zero() {
        warn!(
            fallback_hours = FALLBACK_INTERVAL.as_secs() / 3600,
            "Collection interval is zero, using fallback"
        );
        FALLBACK_INTERVAL
    } else {
        period
    };

    info!(interval_secs = period.as_secs(), "Starting collection interval loop");

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // First tick completes immediately.
            ticker.tick().await;
            let collector = collector.clone();
            tokio::spawn(async move {
                collector.run_pass().await;
            });
        }
    })
}
