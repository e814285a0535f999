//! Background consumer that logs every stock change it is notified about.

use std::thread::{self, JoinHandle};

use stockroom_events::Subscription;
use stockroom_inventory::{InventoryEnvelope, InventoryEvent};

/// Spawn a thread draining `subscription` until the store is dropped.
///
/// Returns the number of envelopes observed. Sequence gaps are logged, since
/// they mean a consumer view would be showing a stale catalog.
pub fn spawn_watcher(subscription: Subscription<InventoryEnvelope>) -> JoinHandle<u64> {
    thread::spawn(move || {
        let mut observed = 0u64;
        let mut last_seq = 0u64;

        while let Ok(envelope) = subscription.recv() {
            let seq = envelope.sequence_number();
            if seq != last_seq + 1 {
                tracing::warn!(
                    expected = last_seq + 1,
                    found = seq,
                    "stock change stream has a gap"
                );
            }
            last_seq = seq;
            observed += 1;

            match envelope.payload() {
                InventoryEvent::StockAdjusted(e) => tracing::info!(
                    seq,
                    event_id = %envelope.event_id(),
                    event = envelope.event_type(),
                    product = %e.name,
                    reason = e.reason.as_str(),
                    previous = e.previous,
                    current = e.current,
                    "stock change observed"
                ),
            }
        }

        tracing::debug!(observed, "stock watcher stopped");
        observed
    })
}
